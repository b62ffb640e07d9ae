use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

const MAX_NAME_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 64;
const MAX_ADDRESS_LEN: usize = 256;
const MAX_PHONE_NUMBER_LEN: usize = 32;

/// A stored contact profile. `id` is assigned by the store on insert.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub date_joined: NaiveDate,
}

/// Why a client-submitted account body was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body is not valid JSON: {0}")]
    MalformedJson(String),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Invalid Account: missing {0}")]
    MissingField(&'static str),
    #[error("Invalid Account: {field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Invalid Account: {0} must not be empty")]
    Empty(&'static str),
    #[error("Invalid Account: {field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Invalid Account: date_joined {0:?} is not an ISO date (YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Client-supplied account fields after validation. Unknown keys, including `id`, are dropped.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct AccountDraft {
    #[schema(example = "Joe")]
    pub name: String,
    #[schema(example = "joe@example.com")]
    pub email: String,
    #[schema(example = "1 Main St")]
    pub address: String,
    #[schema(example = "555-0100")]
    pub phone_number: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "2024-01-31")]
    pub date_joined: Option<NaiveDate>,
}

impl AccountDraft {
    /// Parses raw body bytes. Anything that is not a JSON document fails with [`ValidationError::MalformedJson`].
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
        Self::parse(&value)
    }

    pub fn parse(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let name = required_text(object, "name", MAX_NAME_LEN)?;
        if name.trim().is_empty() {
            return Err(ValidationError::Empty("name"));
        }
        let email = required_text(object, "email", MAX_EMAIL_LEN)?;
        let address = required_text(object, "address", MAX_ADDRESS_LEN)?;
        let phone_number = optional_text(object, "phone_number", MAX_PHONE_NUMBER_LEN)?;
        let date_joined = optional_text(object, "date_joined", usize::MAX)?
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidDate(raw))
            })
            .transpose()?;

        Ok(Self {
            name,
            email,
            address,
            phone_number,
            date_joined,
        })
    }

    /// Turns the draft into an unsaved account, defaulting `date_joined` to `today`.
    pub fn into_account(self, today: NaiveDate) -> Account {
        Account {
            id: 0,
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined.unwrap_or(today),
        }
    }
}

impl Account {
    /// Overwrites every mutable field with the draft. `id` never changes and
    /// `date_joined` is kept unless the draft carries one.
    pub fn apply(&mut self, draft: AccountDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.address = draft.address;
        self.phone_number = draft.phone_number;
        if let Some(date_joined) = draft.date_joined {
            self.date_joined = date_joined;
        }
    }
}

fn required_text(
    object: &Map<String, Value>,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(value) => text(value, field, max),
    }
}

fn optional_text(
    object: &Map<String, Value>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => text(value, field, max).map(Some),
    }
}

fn text(value: &Value, field: &'static str, max: usize) -> Result<String, ValidationError> {
    let s = value.as_str().ok_or(ValidationError::InvalidType {
        field,
        expected: "a string",
    })?;
    if s.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(s.to_owned())
}
