use std::sync::Arc;

use anyhow::Result;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::map_unique_violation;
use crate::base::repository::AccountRepository;
use crate::data::database::ConnectionPool;
use crate::error::StoreError;
use crate::models::account::{Account, AccountId};

const ACCOUNT_COLUMNS: &str = "id, username, first_name, last_name, email";

/// SQLite implementation of the AccountRepository trait
pub struct SqliteAccountRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteAccountRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Account> {
        Ok(Account {
            id: AccountId(row.get(0)?),
            username: row.get(1)?,
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            email: row.get(4)?,
        })
    }
}

impl AccountRepository for SqliteAccountRepository {
    fn save_account(&self, account: &Account) -> Result<()> {
        debug!("Saving account '{}'", account.username);
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO accounts (id, username, first_name, last_name, email)
             VALUES (?, ?, ?, ?, ?)",
            params![
                account.id.0,
                account.username,
                account.first_name,
                account.last_name,
                account.email,
            ],
        )
        .map_err(|e| {
            map_unique_violation(
                e,
                StoreError::DuplicateUsername {
                    username: account.username.clone(),
                },
            )
        })?;
        Ok(())
    }

    fn get_account_by_id(&self, id: &AccountId) -> Result<Option<Account>> {
        let conn = self.pool.get()?;
        let account = conn
            .query_row(
                &format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = ?"),
                [&id.0],
                Self::map_row,
            )
            .optional()?;
        Ok(account)
    }

    fn get_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        let conn = self.pool.get()?;
        let account = conn
            .query_row(
                &format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = ?"),
                [username],
                Self::map_row,
            )
            .optional()?;
        Ok(account)
    }

    fn delete_account(&self, id: &AccountId) -> Result<()> {
        self.pool.get()?.execute("DELETE FROM accounts WHERE id = ?", [&id.0])?;
        Ok(())
    }
}
