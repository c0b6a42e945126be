use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Account;

/// Unique identifier for a reporter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReporterId(pub String);

impl fmt::Display for ReporterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author profile attached to exactly one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reporter {
    pub id: ReporterId,
    /// The account this profile belongs to
    pub account: Account,
    /// Free-text biography, may be empty
    pub bio: String,
    /// Relative path of the uploaded avatar, if any
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reporter {
    pub fn new(account: Account) -> Self {
        Self {
            id: ReporterId(Uuid::new_v4().to_string()),
            account,
            bio: String::new(),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_bio(mut self, bio: String) -> Self {
        self.bio = bio;
        self
    }

    pub fn with_avatar(mut self, avatar: String) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Full name of the account, falling back to the username
    pub fn display_name(&self) -> String {
        let full_name = self.account.full_name();
        if full_name.is_empty() {
            self.account.username.clone()
        } else {
            full_name
        }
    }

    pub fn url_path(&self) -> String {
        format!("/reporter/{}/", self.id)
    }
}

impl fmt::Display for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_creation() {
        let account = Account::new("testuser".to_string())
            .with_name("Test".to_string(), "User".to_string())
            .with_email("test@example.com".to_string());
        let reporter = Reporter::new(account).with_bio("Test reporter bio".to_string());

        assert_eq!(reporter.to_string(), "Test User");
        assert_eq!(reporter.bio, "Test reporter bio");
        assert!(reporter.avatar.is_none());
        assert_eq!(reporter.url_path(), format!("/reporter/{}/", reporter.id.0));
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let reporter = Reporter::new(Account::new("stringer".to_string()));
        assert_eq!(reporter.display_name(), "stringer");
    }
}
