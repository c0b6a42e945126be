use anyhow::Result;

use crate::models::account::{Account, AccountId};

/// Storage for login identities
pub trait AccountRepository: Send + Sync {
    /// Saves a new account; fails with `DuplicateUsername` if the username is taken
    fn save_account(&self, account: &Account) -> Result<()>;

    fn get_account_by_id(&self, id: &AccountId) -> Result<Option<Account>>;

    fn get_account_by_username(&self, username: &str) -> Result<Option<Account>>;

    /// Deletes an account together with its reporter profile and articles
    fn delete_account(&self, id: &AccountId) -> Result<()>;
}
