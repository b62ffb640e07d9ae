use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::Deserialize;
use tracing::error;

use crate::models::{AccountDraft, Error, ValidationError};

/// The only media type accepted for account bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Id segment of an account item path. Non-integer ids are rejected as unknown accounts.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(Error))]
pub struct AccountPath {
    pub id: i32,
}

/// Raw body of an account write, admitted only when declared as JSON.
/// Parsing is deferred so callers can look up the target record first.
pub struct AccountPayload(Bytes);

impl AccountPayload {
    pub fn draft(&self) -> Result<AccountDraft, ValidationError> {
        AccountDraft::from_slice(&self.0)
    }
}

#[async_trait]
impl<S> FromRequest<S> for AccountPayload
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers(), JSON_MEDIA_TYPE)?;
        let body = Bytes::from_request(req, state).await?;
        Ok(Self(body))
    }
}

/// Fails with 415 unless the declared content type is `media_type`. Parameters such as
/// `charset` are ignored and the comparison is case-insensitive.
pub fn check_content_type(headers: &HeaderMap, media_type: &str) -> Result<(), Error> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let essence = content_type
        .and_then(|v| v.split(';').next())
        .map(str::trim);

    match essence {
        Some(essence) if essence.eq_ignore_ascii_case(media_type) => Ok(()),
        _ => {
            error!("Invalid Content-Type: {:?}", content_type);
            Err(Error::unsupported_media_type(media_type))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, StatusCode};

    use super::*;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn accepts_json_with_or_without_parameters() {
        assert!(check_content_type(&headers("application/json"), JSON_MEDIA_TYPE).is_ok());
        assert!(
            check_content_type(&headers("Application/JSON; charset=utf-8"), JSON_MEDIA_TYPE)
                .is_ok()
        );
    }

    #[test]
    fn rejects_other_or_absent_types() {
        let err = check_content_type(&headers("text/html"), JSON_MEDIA_TYPE).unwrap_err();
        assert_eq!(err.code, StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let err = check_content_type(&HeaderMap::new(), JSON_MEDIA_TYPE).unwrap_err();
        assert_eq!(err.code, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(err.body.message, "Content-Type must be application/json");
    }
}
