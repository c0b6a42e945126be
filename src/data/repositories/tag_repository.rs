use std::sync::Arc;

use anyhow::Result;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::map_unique_violation;
use crate::base::repository::TagRepository;
use crate::data::database::ConnectionPool;
use crate::error::{EntityKind, StoreError};
use crate::models::article::ArticleId;
use crate::models::tag::{Tag, TagId};

/// SQLite implementation of the TagRepository trait
pub struct SqliteTagRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteTagRepository {
    /// Creates a new SQLite tag repository
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Maps a database row to a Tag
    fn map_row(row: &Row) -> rusqlite::Result<Tag> {
        Ok(Tag {
            id: TagId(row.get(0)?),
            name: row.get(1)?,
            slug: row.get(2)?,
        })
    }

    fn duplicate(tag: &Tag) -> StoreError {
        StoreError::DuplicateSlug {
            kind: EntityKind::Tag,
            slug: tag.slug.clone(),
        }
    }

    fn find_one(&self, column: &str, value: &str) -> Result<Option<Tag>> {
        let conn = self.pool.get()?;
        let tag = conn
            .query_row(
                &format!("SELECT id, name, slug FROM tags WHERE {column} = ?"),
                [value],
                Self::map_row,
            )
            .optional()?;
        Ok(tag)
    }
}

impl TagRepository for SqliteTagRepository {
    fn save_tag(&self, tag: &Tag) -> Result<()> {
        debug!("Saving tag '{}' ({})", tag.name, tag.slug);
        self.pool
            .get()?
            .execute(
                "INSERT INTO tags (id, name, slug) VALUES (?, ?, ?)",
                params![tag.id.0, tag.name, tag.slug],
            )
            .map_err(|e| map_unique_violation(e, Self::duplicate(tag)))?;
        Ok(())
    }

    fn get_tag_by_id(&self, id: &TagId) -> Result<Option<Tag>> {
        self.find_one("id", &id.0)
    }

    fn get_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>> {
        self.find_one("slug", slug)
    }

    fn get_all_tags(&self) -> Result<Vec<Tag>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, slug
             FROM tags
             ORDER BY name ASC",
        )?;

        let tags = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    fn update_tag(&self, tag: &Tag) -> Result<()> {
        let updated = self
            .pool
            .get()?
            .execute(
                "UPDATE tags
                 SET name = ?, slug = ?
                 WHERE id = ?",
                params![tag.name, tag.slug, tag.id.0],
            )
            .map_err(|e| map_unique_violation(e, Self::duplicate(tag)))?;

        if updated == 0 {
            return Err(StoreError::NotFound {
                kind: EntityKind::Tag,
                key: tag.id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn delete_tag(&self, id: &TagId) -> Result<()> {
        self.pool.get()?.execute("DELETE FROM tags WHERE id = ?", [&id.0])?;
        Ok(())
    }

    fn get_article_tags(&self, article_id: &ArticleId) -> Result<Vec<Tag>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT t.id, t.name, t.slug FROM tags t
             JOIN article_tags at ON t.id = at.tag_id
             WHERE at.article_id = ?
             ORDER BY t.name",
        )?;

        let tags = stmt
            .query_map([&article_id.0], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    fn add_tag_to_article(&self, article_id: &ArticleId, tag_id: &TagId) -> Result<()> {
        self.pool.get()?.execute(
            "INSERT OR IGNORE INTO article_tags (article_id, tag_id) VALUES (?, ?)",
            [&article_id.0, &tag_id.0],
        )?;
        Ok(())
    }

    fn remove_tag_from_article(&self, article_id: &ArticleId, tag_id: &TagId) -> Result<()> {
        self.pool.get()?.execute(
            "DELETE FROM article_tags WHERE article_id = ? AND tag_id = ?",
            [&article_id.0, &tag_id.0],
        )?;
        Ok(())
    }

    fn count_tag_articles(&self, tag_id: &TagId) -> Result<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM article_tags WHERE tag_id = ?",
            [&tag_id.0],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}
