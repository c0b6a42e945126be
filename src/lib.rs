pub mod base;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod text;
pub mod utils;

// Re-export repository traits
pub use base::repository::{
    AccountRepository,
    ArticleRepository,
    ArticleScope,
    CategoryRepository,
    ReporterRepository,
    TagRepository,
};

// Re-export models
pub use models::{
    account::{Account, AccountId},
    article::{Article, ArticleId, ArticleStatus},
    category::{Category, CategoryId},
    reporter::{Reporter, ReporterId},
    tag::{Tag, TagId},
};

pub use crate::config::AppConfig;
pub use data::Database;
pub use error::{EntityKind, StoreError};

// Re-export services selectively
pub use services::{
    admin::{AdminService, ArticleFilter},
    browse::{BrowseLimits, BrowseService, Page},
    presenter::{ArticleCard, Presenter},
    publishing::PublishingService,
};

// Re-export the text helpers
pub use text::{
    derive_slug,
    extract_summary,
    reading_time,
    truncate_html,
    truncate_html_words,
    FilterRegistry,
};
