use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AccountRepository, RepositoryError, Result};
use crate::models::Account;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Account>,
}

/// Process-local account store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryDatabase {
    table: RwLock<Table>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryDatabase {
    async fn create(&self, new_account: &Account) -> Result<Account> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let account = Account {
            id: table.last_id,
            ..new_account.clone()
        };
        table.rows.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find(&self, id: i32) -> Result<Option<Account>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, account: &Account) -> Result<Account> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&account.id) {
            Some(row) => {
                *row = account.clone();
                Ok(account.clone())
            }
            None => Err(RepositoryError::NotFound(account.id)),
        }
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Account>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn account(name: &str) -> Account {
        Account {
            id: 0,
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: "1 Main".to_owned(),
            phone_number: None,
            date_joined: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let db = InMemoryDatabase::new();
        let first = db.create(&account("Ann")).await.unwrap();
        let second = db.create(&account("Bob")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(db.find(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let db = InMemoryDatabase::new();
        let first = db.create(&account("Ann")).await.unwrap();
        db.delete(first.id).await.unwrap();
        let second = db.create(&account("Bob")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn all_is_ordered_and_empty_when_nothing_is_stored() {
        let db = InMemoryDatabase::new();
        assert!(db.all().await.unwrap().is_empty());
        for name in ["Ann", "Bob", "Cat"] {
            db.create(&account(name)).await.unwrap();
        }
        let names: Vec<_> = db.all().await.unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["Ann", "Bob", "Cat"]);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let db = InMemoryDatabase::new();
        let ghost = Account {
            id: 9,
            ..account("Ghost")
        };
        assert!(matches!(
            db.update(&ghost).await,
            Err(RepositoryError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn delete_of_missing_row_is_a_no_op() {
        let db = InMemoryDatabase::new();
        db.create(&account("Ann")).await.unwrap();
        db.delete(42).await.unwrap();
        db.delete(42).await.unwrap();
        assert_eq!(db.all().await.unwrap().len(), 1);
    }
}
