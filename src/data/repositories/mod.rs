mod account_repository;
mod article_repository;
mod category_repository;
mod reporter_repository;
mod tag_repository;

pub use account_repository::SqliteAccountRepository;
pub use article_repository::SqliteArticleRepository;
pub use category_repository::SqliteCategoryRepository;
pub use reporter_repository::SqliteReporterRepository;
pub use tag_repository::SqliteTagRepository;

use rusqlite::ffi;

use crate::error::StoreError;

/// Turns a UNIQUE constraint failure into `rejection`, passing any other
/// error through untouched.
pub(crate) fn map_unique_violation(err: rusqlite::Error, rejection: StoreError) -> anyhow::Error {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            rejection.into()
        }
        _ => err.into(),
    }
}
