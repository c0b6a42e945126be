use std::fmt;

use thiserror::Error;

/// The kinds of records the newsroom stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Category,
    Reporter,
    Article,
    Tag,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Account => "account",
            EntityKind::Category => "category",
            EntityKind::Reporter => "reporter",
            EntityKind::Article => "article",
            EntityKind::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Write rejections callers are expected to handle.
///
/// These travel inside `anyhow::Error`; match them with
/// `err.downcast_ref::<StoreError>()`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("a {kind} with slug '{slug}' already exists")]
    DuplicateSlug { kind: EntityKind, slug: String },

    #[error("account '{account}' already has a reporter profile")]
    DuplicateReporter { account: String },

    #[error("username '{username}' is already taken")]
    DuplicateUsername { username: String },

    #[error("{kind} needs a slug and none could be derived from its name")]
    MissingSlug { kind: EntityKind },

    #[error("'{slug}' is not a valid {kind} slug")]
    InvalidSlug { kind: EntityKind, slug: String },

    #[error("invalid article status '{0}', expected 'draft' or 'published'")]
    InvalidStatus(String),

    #[error("{kind} '{key}' not found")]
    NotFound { kind: EntityKind, key: String },
}
