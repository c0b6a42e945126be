use std::sync::Arc;

use anyhow::Result;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::map_unique_violation;
use crate::base::repository::ReporterRepository;
use crate::data::database::ConnectionPool;
use crate::error::{EntityKind, StoreError};
use crate::models::account::{Account, AccountId};
use crate::models::reporter::{Reporter, ReporterId};

const REPORTER_SELECT: &str = "SELECT r.id, r.bio, r.avatar, r.created_at,
        a.id, a.username, a.first_name, a.last_name, a.email
     FROM reporters r
     JOIN accounts a ON a.id = r.account_id";

/// SQLite implementation of the ReporterRepository trait
pub struct SqliteReporterRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteReporterRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Maps a row of `REPORTER_SELECT` to a Reporter with its account
    fn map_row(row: &Row) -> rusqlite::Result<Reporter> {
        Ok(Reporter {
            id: ReporterId(row.get(0)?),
            bio: row.get(1)?,
            avatar: row.get(2)?,
            created_at: row.get(3)?,
            account: Account {
                id: AccountId(row.get(4)?),
                username: row.get(5)?,
                first_name: row.get(6)?,
                last_name: row.get(7)?,
                email: row.get(8)?,
            },
        })
    }

    fn find_one(&self, column: &str, value: &str) -> Result<Option<Reporter>> {
        let conn = self.pool.get()?;
        let reporter = conn
            .query_row(
                &format!("{REPORTER_SELECT} WHERE {column} = ?"),
                [value],
                Self::map_row,
            )
            .optional()?;
        Ok(reporter)
    }
}

impl ReporterRepository for SqliteReporterRepository {
    fn save_reporter(&self, reporter: &Reporter) -> Result<()> {
        debug!("Saving reporter for account '{}'", reporter.account.username);
        self.pool
            .get()?
            .execute(
                "INSERT INTO reporters (id, account_id, bio, avatar, created_at)
                 VALUES (?, ?, ?, ?, ?)",
                params![
                    reporter.id.0,
                    reporter.account.id.0,
                    reporter.bio,
                    reporter.avatar,
                    reporter.created_at,
                ],
            )
            .map_err(|e| {
                map_unique_violation(
                    e,
                    StoreError::DuplicateReporter {
                        account: reporter.account.username.clone(),
                    },
                )
            })?;
        Ok(())
    }

    fn get_reporter_by_id(&self, id: &ReporterId) -> Result<Option<Reporter>> {
        self.find_one("r.id", &id.0)
    }

    fn get_reporter_by_account(&self, account_id: &AccountId) -> Result<Option<Reporter>> {
        self.find_one("r.account_id", &account_id.0)
    }

    fn get_all_reporters(&self) -> Result<Vec<Reporter>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{REPORTER_SELECT} ORDER BY a.username"))?;
        let reporters = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reporters)
    }

    fn update_reporter(&self, reporter: &Reporter) -> Result<()> {
        let updated = self.pool.get()?.execute(
            "UPDATE reporters SET bio = ?, avatar = ? WHERE id = ?",
            params![reporter.bio, reporter.avatar, reporter.id.0],
        )?;

        if updated == 0 {
            return Err(StoreError::NotFound {
                kind: EntityKind::Reporter,
                key: reporter.id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn delete_reporter(&self, id: &ReporterId) -> Result<()> {
        self.pool.get()?.execute("DELETE FROM reporters WHERE id = ?", [&id.0])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::AccountRepository;
    use crate::data::Database;

    fn account(database: &Database, username: &str) -> Account {
        let account = Account::new(username.to_string())
            .with_name("Test".to_string(), "User".to_string());
        database.account_repository().save_account(&account).unwrap();
        account
    }

    #[test]
    fn test_save_and_load_with_account() {
        let database = Database::in_memory().unwrap();
        let repository = database.reporter_repository();

        let reporter = Reporter::new(account(&database, "testuser"))
            .with_bio("Test reporter bio".to_string())
            .with_avatar("reporters/test.png".to_string());
        repository.save_reporter(&reporter).unwrap();

        let loaded = repository.get_reporter_by_id(&reporter.id).unwrap().unwrap();
        assert_eq!(loaded.to_string(), "Test User");
        assert_eq!(loaded.bio, "Test reporter bio");
        assert_eq!(loaded.avatar.as_deref(), Some("reporters/test.png"));
        assert_eq!(loaded.account, reporter.account);

        let by_account = repository.get_reporter_by_account(&reporter.account.id).unwrap();
        assert_eq!(by_account.map(|r| r.id), Some(reporter.id));
    }

    #[test]
    fn test_one_reporter_per_account() {
        let database = Database::in_memory().unwrap();
        let repository = database.reporter_repository();
        let account = account(&database, "testuser");

        repository.save_reporter(&Reporter::new(account.clone())).unwrap();
        let err = repository.save_reporter(&Reporter::new(account)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StoreError>(),
            Some(&StoreError::DuplicateReporter { account: "testuser".to_string() })
        );
    }

    #[test]
    fn test_deleting_account_removes_reporter() {
        let database = Database::in_memory().unwrap();
        let repository = database.reporter_repository();
        let account = account(&database, "leaver");
        let reporter = Reporter::new(account.clone());
        repository.save_reporter(&reporter).unwrap();

        database.account_repository().delete_account(&account.id).unwrap();
        assert_eq!(repository.get_reporter_by_id(&reporter.id).unwrap(), None);
    }

    #[test]
    fn test_update_reporter() {
        let database = Database::in_memory().unwrap();
        let repository = database.reporter_repository();
        let mut reporter = Reporter::new(account(&database, "editor"));
        repository.save_reporter(&reporter).unwrap();

        reporter.bio = "Covers city hall".to_string();
        reporter.avatar = None;
        repository.update_reporter(&reporter).unwrap();

        let all = repository.get_all_reporters().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].bio, "Covers city hall");
    }
}
