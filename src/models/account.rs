use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A login identity. Reporters hang off one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Account {
    pub fn new(username: String) -> Self {
        Self {
            id: AccountId(Uuid::new_v4().to_string()),
            username,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
        }
    }

    pub fn with_name(mut self, first_name: String, last_name: String) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = email;
        self
    }

    /// First and last name separated by a space, trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let account = Account::new("jdoe".to_string())
            .with_name("Jane".to_string(), "Doe".to_string());
        assert_eq!(account.full_name(), "Jane Doe");

        let account = Account::new("jdoe".to_string())
            .with_name("Jane".to_string(), String::new());
        assert_eq!(account.full_name(), "Jane");

        assert_eq!(Account::new("jdoe".to_string()).full_name(), "");
    }
}
