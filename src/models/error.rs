use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::{error, warn};

use super::account::ValidationError;
use super::dto::ErrorMessage;
use crate::database::RepositoryError;

/// An HTTP failure: status code plus the JSON body sent to the client.
#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<ErrorMessage>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        let reason = code.canonical_reason().unwrap_or("Unknown");
        Self {
            code,
            body: Json(ErrorMessage::new(code.as_u16(), reason, message)),
        }
    }

    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            &format!("Account with id [{id}] could not be found."),
        )
    }

    pub fn unsupported_media_type(expected: &str) -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            &format!("Content-Type must be {expected}"),
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        warn!("Rejected account payload: {}", error);
        Self::new(StatusCode::BAD_REQUEST, &error.to_string())
    }
}

impl From<RepositoryError> for Error {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(id) => Self::not_found(id),
            RepositoryError::Database(e) => {
                error!("Database error: {:?}", e);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// A path segment that is not a valid id cannot name a stored account.
impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        warn!("Unparseable account id: {}", rejection.body_text());
        Self::new(
            StatusCode::NOT_FOUND,
            "Account id must be an integer; no such account exists.",
        )
    }
}

impl From<BytesRejection> for Error {
    fn from(rejection: BytesRejection) -> Self {
        Self::new(rejection.status(), &rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_status_reason_and_message() {
        let err = Error::not_found(12);
        assert_eq!(err.code, StatusCode::NOT_FOUND);
        assert_eq!(err.body.status, 404);
        assert_eq!(err.body.error, "Not Found");
        assert_eq!(err.body.message, "Account with id [12] could not be found.");
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = Error::from(ValidationError::MissingField("email"));
        assert_eq!(err.code, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.message, "Invalid Account: missing email");
    }

    #[test]
    fn database_errors_do_not_leak_details() {
        let err = Error::from(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(err.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.message, "Internal server error");
    }

    #[test]
    fn unsupported_media_type_names_the_required_type() {
        let err = Error::unsupported_media_type("application/json");
        assert_eq!(err.code, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(err.body.message, "Content-Type must be application/json");
    }
}
