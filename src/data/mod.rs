pub mod database;
pub mod repositories;

pub use database::{ConnectionPool, Database};
pub use repositories::{
    SqliteAccountRepository,
    SqliteArticleRepository,
    SqliteCategoryRepository,
    SqliteReporterRepository,
    SqliteTagRepository,
};
