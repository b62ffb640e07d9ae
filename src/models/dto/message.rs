use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned with every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = "Account with id [7] could not be found.")]
    pub message: String,
}

impl ErrorMessage {
    pub fn new(status: u16, error: &str, message: &str) -> Self {
        Self {
            status,
            error: error.to_owned(),
            message: message.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "OK")]
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "Account REST API Service")]
    pub name: String,
    #[schema(example = "1.0")]
    pub version: String,
    #[schema(example = "/accounts")]
    pub paths: String,
}
