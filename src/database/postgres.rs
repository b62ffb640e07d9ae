use async_trait::async_trait;
use sqlx::PgPool;

use super::{AccountRepository, RepositoryError, Result};
use crate::models::Account;

pub struct PostgreDatabase {
    sqlx_db: PgPool,
}

impl PostgreDatabase {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgreDatabase { sqlx_db }
    }

    /// Creates the `account` table when it does not exist yet.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS account (
                id SERIAL PRIMARY KEY,
                name VARCHAR(64) NOT NULL,
                email VARCHAR(64) NOT NULL,
                address VARCHAR(256) NOT NULL,
                phone_number VARCHAR(32),
                date_joined DATE NOT NULL DEFAULT CURRENT_DATE
            )
            "#,
        )
        .execute(&self.sqlx_db)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for PostgreDatabase {
    async fn create(&self, new_account: &Account) -> Result<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO account (name, email, address, phone_number, date_joined)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&new_account.name)
        .bind(&new_account.email)
        .bind(&new_account.address)
        .bind(&new_account.phone_number)
        .bind(new_account.date_joined)
        .fetch_one(&self.sqlx_db)
        .await?;
        Ok(row)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM account
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.sqlx_db)
        .await?;
        Ok(row)
    }

    async fn update(&self, account: &Account) -> Result<Account> {
        let row = sqlx::query_as::<_, Account>(
            r#"
            UPDATE account
            SET name = $1,
                email = $2,
                address = $3,
                phone_number = $4,
                date_joined = $5
            WHERE id = $6
            RETURNING id, name, email, address, phone_number, date_joined
            "#,
        )
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(account.date_joined)
        .bind(account.id)
        .fetch_optional(&self.sqlx_db)
        .await?;

        row.ok_or(RepositoryError::NotFound(account.id))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.sqlx_db)
            .await?;
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM account
            ORDER BY id
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await?;
        Ok(rows)
    }
}
