mod memory;
mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::models::Account;
pub use memory::InMemoryDatabase;
pub use postgres::PostgreDatabase;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("account {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type Result<T, E = RepositoryError> = std::result::Result<T, E>;

/// Storage for accounts. Every method is a single-record operation and is atomic on its own;
/// concurrent writes to one id resolve as last-write-wins.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts `account`, ignoring its `id`, and returns the stored row with the assigned id.
    async fn create(&self, account: &Account) -> Result<Account>;

    async fn find(&self, id: i32) -> Result<Option<Account>>;

    /// Overwrites the row with `account.id`. Fails with [`RepositoryError::NotFound`] if it is gone.
    async fn update(&self, account: &Account) -> Result<Account>;

    /// Removes the row with `id`. Removing an absent row is not an error.
    async fn delete(&self, id: i32) -> Result<()>;

    /// Every stored account, ordered by id.
    async fn all(&self) -> Result<Vec<Account>>;
}

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(max_connections)
        .min_connections(max_connections.min(4))
        .connect(db_url)
        .await
}
