use anyhow::Result;

use crate::models::account::AccountId;
use crate::models::reporter::{Reporter, ReporterId};

/// Trait defining the interface for reporter repository implementations
pub trait ReporterRepository: Send + Sync {
    /// Saves a new reporter; an account can back at most one reporter
    fn save_reporter(&self, reporter: &Reporter) -> Result<()>;

    /// Retrieves a reporter, with its account, by ID
    fn get_reporter_by_id(&self, id: &ReporterId) -> Result<Option<Reporter>>;

    /// Retrieves the reporter attached to an account
    fn get_reporter_by_account(&self, account_id: &AccountId) -> Result<Option<Reporter>>;

    /// Retrieves all reporters ordered by username
    fn get_all_reporters(&self) -> Result<Vec<Reporter>>;

    /// Updates bio and avatar of an existing reporter
    fn update_reporter(&self, reporter: &Reporter) -> Result<()>;

    /// Deletes a reporter and every article they wrote
    fn delete_reporter(&self, id: &ReporterId) -> Result<()>;
}
