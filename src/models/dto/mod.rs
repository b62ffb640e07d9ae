pub mod account;
pub mod message;
pub use account::*;
pub use message::*;

use crate::models::AccountDraft;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(
    AccountDraft,
    AccountResponse,
    ErrorMessage,
    HealthStatus,
    ServiceInfo,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
