use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;

use crate::data::repositories::{
    SqliteAccountRepository,
    SqliteArticleRepository,
    SqliteCategoryRepository,
    SqliteReporterRepository,
    SqliteTagRepository,
};

pub type ConnectionPool = Pool<SqliteConnectionManager>;

const SCHEMA: &str = include_str!("schema.sql");

/// Owns the connection pool and hands out repositories backed by it
#[derive(Clone)]
pub struct Database {
    pool: Arc<ConnectionPool>,
}

impl Database {
    /// Opens the SQLite file at `db_path`, creating it and the schema if needed
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref();
        info!("Opening database at {}", db_path.display());

        let manager = SqliteConnectionManager::file(db_path)
            .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE)
            .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));

        let pool = Pool::new(manager)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
        Self::with_pool(pool)
    }

    /// Opens a private in-memory database.
    ///
    /// Every in-memory SQLite connection is its own database, so the pool is
    /// capped at one connection.
    pub fn in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory()
            .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .context("Failed to open in-memory database")?;
        Self::with_pool(pool)
    }

    fn with_pool(pool: ConnectionPool) -> Result<Self> {
        debug!("Initializing database schema");
        let conn = pool.get()?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        drop(conn);

        Ok(Self { pool: Arc::new(pool) })
    }

    pub fn pool(&self) -> Arc<ConnectionPool> {
        self.pool.clone()
    }

    pub fn account_repository(&self) -> Arc<SqliteAccountRepository> {
        Arc::new(SqliteAccountRepository::new(self.pool.clone()))
    }

    pub fn category_repository(&self) -> Arc<SqliteCategoryRepository> {
        Arc::new(SqliteCategoryRepository::new(self.pool.clone()))
    }

    pub fn reporter_repository(&self) -> Arc<SqliteReporterRepository> {
        Arc::new(SqliteReporterRepository::new(self.pool.clone()))
    }

    pub fn article_repository(&self) -> Arc<SqliteArticleRepository> {
        Arc::new(SqliteArticleRepository::new(self.pool.clone()))
    }

    pub fn tag_repository(&self) -> Arc<SqliteTagRepository> {
        Arc::new(SqliteTagRepository::new(self.pool.clone()))
    }
}
