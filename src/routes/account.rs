use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::info;
use utoipa::OpenApi;

use super::extractors::{AccountPath, AccountPayload};
use crate::{
    models::{dto::AccountResponse, Error},
    AppState,
};

/// Defines the OpenAPI spec for account endpoints
#[derive(OpenApi)]
#[openapi(paths(
    create_account_handler,
    list_accounts_handler,
    get_account_handler,
    update_account_handler,
    delete_account_handler
))]
pub struct AccountsApi;

/// Used to group account endpoints together in the OpenAPI documentation
pub const ACCOUNT_API_GROUP: &str = "ACCOUNT";

pub const ACCOUNTS_PATH: &str = "/accounts";

/// Builds a router for account routes. Items are also reachable under the singular `/account/:id`.
pub fn account_routes() -> Router<Arc<AppState>> {
    let item = get(get_account_handler)
        .put(update_account_handler)
        .delete(delete_account_handler);

    Router::new()
        .route(
            ACCOUNTS_PATH,
            post(create_account_handler).get(list_accounts_handler),
        )
        .route("/accounts/:id", item.clone())
        .route("/account/:id", item)
}

/// Create account handler function
#[utoipa::path(
    post,
    path = "/accounts",
    tag = ACCOUNT_API_GROUP,
    request_body = crate::models::AccountDraft,
    responses(
        (status = 201, description = "Account successfully created", body = AccountResponse,
            headers(("Location" = String, description = "Path of the new account"))),
        (status = 400, description = "Invalid account body", body = crate::models::dto::ErrorMessage),
        (status = 415, description = "Content-Type is not application/json", body = crate::models::dto::ErrorMessage),
    )
)]
pub async fn create_account_handler(
    State(state): State<Arc<AppState>>,
    payload: AccountPayload,
) -> Result<impl IntoResponse, Error> {
    info!("Request to create an Account");
    let draft = payload.draft()?;
    let account = state
        .db
        .create(&draft.into_account(Utc::now().date_naive()))
        .await?;
    info!("Account with id [{}] created", account.id);

    let location = format!("{ACCOUNTS_PATH}/{}", account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AccountResponse::from(account)),
    ))
}

/// List accounts handler function
#[utoipa::path(
    get,
    path = "/accounts",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "All accounts, possibly none", body = [AccountResponse]),
    )
)]
pub async fn list_accounts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, Error> {
    info!("Request to list Accounts");
    let accounts = state.db.all().await?;
    info!("Returning {} accounts", accounts.len());
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

/// Get account handler function
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "Account not found", body = crate::models::dto::ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn get_account_handler(
    State(state): State<Arc<AppState>>,
    AccountPath { id }: AccountPath,
) -> Result<Json<AccountResponse>, Error> {
    info!("Request to read an Account with id: {}", id);
    let account = state.db.find(id).await?.ok_or_else(|| Error::not_found(id))?;
    Ok(Json(AccountResponse::from(account)))
}

/// Update account handler function
#[utoipa::path(
    put,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    request_body = crate::models::AccountDraft,
    responses(
        (status = 200, description = "Account successfully updated", body = AccountResponse),
        (status = 400, description = "Invalid account body", body = crate::models::dto::ErrorMessage),
        (status = 404, description = "Account not found", body = crate::models::dto::ErrorMessage),
        (status = 415, description = "Content-Type is not application/json", body = crate::models::dto::ErrorMessage),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn update_account_handler(
    State(state): State<Arc<AppState>>,
    AccountPath { id }: AccountPath,
    payload: AccountPayload,
) -> Result<Json<AccountResponse>, Error> {
    info!("Request to update an Account with id: {}", id);
    let mut account = state.db.find(id).await?.ok_or_else(|| Error::not_found(id))?;

    account.apply(payload.draft()?);
    let updated_account = state.db.update(&account).await?;

    Ok(Json(AccountResponse::from(updated_account)))
}

/// Delete account handler function. Deleting an unknown id succeeds without effect.
#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    tag = ACCOUNT_API_GROUP,
    responses(
        (status = 204, description = "Account deleted or never existed"),
    ),
    params(
        ("id" = i32, Path, description = "Account ID")
    )
)]
pub async fn delete_account_handler(
    State(state): State<Arc<AppState>>,
    path: Result<AccountPath, Error>,
) -> Result<StatusCode, Error> {
    let Ok(AccountPath { id }) = path else {
        return Ok(StatusCode::NO_CONTENT);
    };
    info!("Request to delete an Account with id: {}", id);

    if let Some(account) = state.db.find(id).await? {
        state.db.delete(account.id).await?;
        info!("Account with id [{}] deleted", id);
    }
    Ok(StatusCode::NO_CONTENT)
}
