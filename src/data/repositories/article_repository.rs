use std::sync::Arc;

use anyhow::Result;
use log::debug;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, OptionalExtension, Row};

use super::map_unique_violation;
use crate::base::repository::{ArticleRepository, ArticleScope};
use crate::data::database::ConnectionPool;
use crate::error::{EntityKind, StoreError};
use crate::models::article::{Article, ArticleId, ArticleStatus};
use crate::models::category::CategoryId;
use crate::models::reporter::ReporterId;

const ARTICLE_COLUMNS: &str = "a.id, a.title, a.slug, a.content, a.summary, a.image, a.status,
        a.category_id, a.reporter_id, a.published_at, a.updated_at";

// Newest first; rowid breaks ties between articles saved in the same instant.
const NEWEST_FIRST: &str = "ORDER BY a.published_at DESC, a.rowid DESC";

impl ToSql for ArticleStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for ArticleStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// SQLite-based article repository implementation
pub struct SqliteArticleRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteArticleRepository {
    /// Creates a new SQLite article repository
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Maps a database row to an Article
    fn map_row(row: &Row) -> rusqlite::Result<Article> {
        Ok(Article {
            id: ArticleId(row.get(0)?),
            title: row.get(1)?,
            slug: row.get(2)?,
            content: row.get(3)?,
            summary: row.get(4)?,
            image: row.get(5)?,
            status: row.get(6)?,
            category_id: CategoryId(row.get(7)?),
            reporter_id: ReporterId(row.get(8)?),
            published_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }

    fn duplicate(article: &Article) -> StoreError {
        StoreError::DuplicateSlug {
            kind: EntityKind::Article,
            slug: article.slug.clone(),
        }
    }

    /// WHERE clause selecting the published articles of `scope`, plus its
    /// bound value if any
    fn scope_filter(scope: &ArticleScope) -> (&'static str, Option<&str>) {
        match scope {
            ArticleScope::All => ("WHERE a.status = 'published'", None),
            ArticleScope::Category(id) => (
                "WHERE a.status = 'published' AND a.category_id = ?",
                Some(id.0.as_str()),
            ),
            ArticleScope::Reporter(id) => (
                "WHERE a.status = 'published' AND a.reporter_id = ?",
                Some(id.0.as_str()),
            ),
            ArticleScope::Tag(id) => (
                "WHERE a.status = 'published'
                   AND a.id IN (SELECT article_id FROM article_tags WHERE tag_id = ?)",
                Some(id.0.as_str()),
            ),
        }
    }

    fn count_where(&self, sql: &str, value: &str) -> Result<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(sql, [value], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl ArticleRepository for SqliteArticleRepository {
    fn save_article(&self, article: &Article) -> Result<()> {
        debug!("Saving article '{}' ({})", article.title, article.slug);
        self.pool
            .get()?
            .execute(
                "INSERT INTO articles (
                    id, title, slug, content, summary, image, status,
                    category_id, reporter_id, published_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    article.id.0,
                    article.title,
                    article.slug,
                    article.content,
                    article.summary,
                    article.image,
                    article.status,
                    article.category_id.0,
                    article.reporter_id.0,
                    article.published_at,
                    article.updated_at,
                ],
            )
            .map_err(|e| map_unique_violation(e, Self::duplicate(article)))?;
        Ok(())
    }

    fn update_article(&self, article: &Article) -> Result<()> {
        let updated = self
            .pool
            .get()?
            .execute(
                "UPDATE articles SET
                    title = ?,
                    slug = ?,
                    content = ?,
                    summary = ?,
                    image = ?,
                    status = ?,
                    category_id = ?,
                    reporter_id = ?,
                    updated_at = ?
                WHERE id = ?",
                params![
                    article.title,
                    article.slug,
                    article.content,
                    article.summary,
                    article.image,
                    article.status,
                    article.category_id.0,
                    article.reporter_id.0,
                    article.updated_at,
                    article.id.0,
                ],
            )
            .map_err(|e| map_unique_violation(e, Self::duplicate(article)))?;

        if updated == 0 {
            return Err(StoreError::NotFound {
                kind: EntityKind::Article,
                key: article.id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn delete_article(&self, id: &ArticleId) -> Result<()> {
        self.pool.get()?.execute("DELETE FROM articles WHERE id = ?", [&id.0])?;
        Ok(())
    }

    fn get_article(&self, id: &ArticleId) -> Result<Option<Article>> {
        let conn = self.pool.get()?;
        let article = conn
            .query_row(
                &format!("SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = ?"),
                [&id.0],
                Self::map_row,
            )
            .optional()?;
        Ok(article)
    }

    fn get_all_articles(&self) -> Result<Vec<Article>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT {ARTICLE_COLUMNS} FROM articles a {NEWEST_FIRST}"))?;
        let articles = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    fn get_published_by_slug(&self, slug: &str) -> Result<Option<Article>> {
        let conn = self.pool.get()?;
        let article = conn
            .query_row(
                &format!(
                    "SELECT {ARTICLE_COLUMNS} FROM articles a
                     WHERE a.slug = ? AND a.status = 'published'"
                ),
                [slug],
                Self::map_row,
            )
            .optional()?;
        Ok(article)
    }

    fn count_published(&self, scope: &ArticleScope) -> Result<usize> {
        let (filter, value) = Self::scope_filter(scope);
        let sql = format!("SELECT COUNT(*) FROM articles a {filter}");
        let conn = self.pool.get()?;
        let count: i64 = match value {
            Some(value) => conn.query_row(&sql, [value], |row| row.get(0))?,
            None => conn.query_row(&sql, [], |row| row.get(0))?,
        };
        Ok(count as usize)
    }

    fn list_published(&self, scope: &ArticleScope, limit: usize, offset: usize) -> Result<Vec<Article>> {
        let (filter, value) = Self::scope_filter(scope);
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles a {filter} {NEWEST_FIRST} LIMIT ? OFFSET ?");
        let limit = limit as i64;
        let offset = offset as i64;

        let mut bound: Vec<&dyn ToSql> = Vec::with_capacity(3);
        if let Some(value) = value.as_ref() {
            bound.push(value);
        }
        bound.push(&limit);
        bound.push(&offset);

        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&sql)?;
        let articles = stmt
            .query_map(&bound[..], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    fn get_related(&self, article: &Article, limit: usize) -> Result<Vec<Article>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a
             WHERE a.status = 'published' AND a.category_id = ? AND a.id != ?
             {NEWEST_FIRST}
             LIMIT ?"
        ))?;
        let articles = stmt
            .query_map(
                params![article.category_id.0, article.id.0, limit as i64],
                Self::map_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(articles)
    }

    fn count_by_category(&self, category_id: &CategoryId) -> Result<usize> {
        self.count_where("SELECT COUNT(*) FROM articles WHERE category_id = ?", &category_id.0)
    }

    fn count_by_reporter(&self, reporter_id: &ReporterId) -> Result<usize> {
        self.count_where("SELECT COUNT(*) FROM articles WHERE reporter_id = ?", &reporter_id.0)
    }
}
