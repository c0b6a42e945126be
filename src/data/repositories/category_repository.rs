use std::sync::Arc;

use anyhow::Result;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::map_unique_violation;
use crate::base::repository::CategoryRepository;
use crate::data::database::ConnectionPool;
use crate::error::{EntityKind, StoreError};
use crate::models::category::{Category, CategoryId};

pub struct SqliteCategoryRepository {
    connection_pool: Arc<ConnectionPool>,
}

impl SqliteCategoryRepository {
    pub fn new(connection_pool: Arc<ConnectionPool>) -> Self {
        Self { connection_pool }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Category> {
        Ok(Category {
            id: CategoryId(row.get(0)?),
            name: row.get(1)?,
            slug: row.get(2)?,
            description: row.get(3)?,
        })
    }

    fn duplicate(category: &Category) -> StoreError {
        StoreError::DuplicateSlug {
            kind: EntityKind::Category,
            slug: category.slug.clone(),
        }
    }

    fn find_one(&self, column: &str, value: &str) -> Result<Option<Category>> {
        let conn = self.connection_pool.get()?;
        let category = conn
            .query_row(
                &format!("SELECT id, name, slug, description FROM categories WHERE {column} = ?"),
                [value],
                Self::map_row,
            )
            .optional()?;
        Ok(category)
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn save_category(&self, category: &Category) -> Result<()> {
        debug!("Saving category '{}' ({})", category.name, category.slug);
        self.connection_pool
            .get()?
            .execute(
                "INSERT INTO categories (id, name, slug, description) VALUES (?, ?, ?, ?)",
                params![category.id.0, category.name, category.slug, category.description],
            )
            .map_err(|e| map_unique_violation(e, Self::duplicate(category)))?;
        Ok(())
    }

    fn get_category_by_id(&self, id: &CategoryId) -> Result<Option<Category>> {
        self.find_one("id", &id.0)
    }

    fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        self.find_one("slug", slug)
    }

    fn get_all_categories(&self) -> Result<Vec<Category>> {
        // Store the connection in a variable to extend its lifetime
        let conn = self.connection_pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, slug, description
             FROM categories
             ORDER BY name",
        )?;

        let categories = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    fn update_category(&self, category: &Category) -> Result<()> {
        let updated = self
            .connection_pool
            .get()?
            .execute(
                "UPDATE categories SET
                    name = ?,
                    slug = ?,
                    description = ?
                WHERE id = ?",
                params![category.name, category.slug, category.description, category.id.0],
            )
            .map_err(|e| map_unique_violation(e, Self::duplicate(category)))?;

        if updated == 0 {
            return Err(StoreError::NotFound {
                kind: EntityKind::Category,
                key: category.id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn delete_category(&self, id: &CategoryId) -> Result<()> {
        self.connection_pool
            .get()?
            .execute("DELETE FROM categories WHERE id = ?", [&id.0])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Database;

    fn category(name: &str) -> Category {
        let mut category = Category::new(name.to_string());
        category.fill_derived_fields();
        category
    }

    #[test]
    fn test_save_and_lookup() {
        let database = Database::in_memory().unwrap();
        let repository = database.category_repository();

        let technology = category("Technology").with_description("Tech news".to_string());
        repository.save_category(&technology).unwrap();

        assert_eq!(repository.get_category_by_id(&technology.id).unwrap(), Some(technology.clone()));
        assert_eq!(repository.get_category_by_slug("technology").unwrap(), Some(technology));
        assert_eq!(repository.get_category_by_slug("sports").unwrap(), None);
    }

    #[test]
    fn test_all_categories_ordered_by_name() {
        let database = Database::in_memory().unwrap();
        let repository = database.category_repository();
        for name in ["Sports", "Business", "Technology"] {
            repository.save_category(&category(name)).unwrap();
        }

        let names: Vec<String> = repository
            .get_all_categories()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Business", "Sports", "Technology"]);
    }

    #[test]
    fn test_duplicate_slug_is_rejected() {
        let database = Database::in_memory().unwrap();
        let repository = database.category_repository();

        repository.save_category(&category("World News")).unwrap();
        let err = repository.save_category(&category("World  News!")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StoreError>(),
            Some(&StoreError::DuplicateSlug {
                kind: EntityKind::Category,
                slug: "world-news".to_string(),
            })
        );
    }

    #[test]
    fn test_update_and_delete() {
        let database = Database::in_memory().unwrap();
        let repository = database.category_repository();

        let mut sports = category("Sports");
        repository.save_category(&sports).unwrap();

        sports.description = "Scores and fixtures".to_string();
        repository.update_category(&sports).unwrap();
        assert_eq!(
            repository.get_category_by_id(&sports.id).unwrap().map(|c| c.description),
            Some("Scores and fixtures".to_string())
        );

        repository.delete_category(&sports.id).unwrap();
        assert_eq!(repository.get_category_by_id(&sports.id).unwrap(), None);

        let err = repository.update_category(&sports).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::NotFound { kind: EntityKind::Category, .. })
        ));
    }
}
