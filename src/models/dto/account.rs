use crate::models::Account;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Joe")]
    pub name: String,
    #[schema(example = "joe@example.com")]
    pub email: String,
    #[schema(example = "1 Main St")]
    pub address: String,
    #[schema(example = "555-0100")]
    pub phone_number: Option<String>,
    #[schema(example = "2024-01-31")]
    pub date_joined: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            address: account.address,
            phone_number: account.phone_number,
            date_joined: account.date_joined.to_string(),
        }
    }
}
