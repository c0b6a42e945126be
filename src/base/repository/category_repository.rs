use anyhow::Result;

use crate::models::category::{Category, CategoryId};

/// Trait defining the interface for category repository implementations
pub trait CategoryRepository: Send + Sync {
    /// Saves a new category; fails with `DuplicateSlug` on a slug collision
    fn save_category(&self, category: &Category) -> Result<()>;

    /// Retrieves a category by its ID
    fn get_category_by_id(&self, id: &CategoryId) -> Result<Option<Category>>;

    /// Retrieves a category by its slug
    fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;

    /// Retrieves all categories ordered by name
    fn get_all_categories(&self) -> Result<Vec<Category>>;

    /// Updates an existing category; fails with `NotFound` if it does not exist
    fn update_category(&self, category: &Category) -> Result<()>;

    /// Deletes a category and every article filed under it
    fn delete_category(&self, id: &CategoryId) -> Result<()>;
}
