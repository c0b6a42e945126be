use anyhow::Result;

use crate::models::article::ArticleId;
use crate::models::tag::{Tag, TagId};

/// Trait defining the interface for tag repository implementations
pub trait TagRepository: Send + Sync {
    /// Saves a new tag; fails with `DuplicateSlug` on a slug collision
    fn save_tag(&self, tag: &Tag) -> Result<()>;

    /// Retrieves a tag by its ID
    fn get_tag_by_id(&self, id: &TagId) -> Result<Option<Tag>>;

    /// Retrieves a tag by its slug
    fn get_tag_by_slug(&self, slug: &str) -> Result<Option<Tag>>;

    /// Retrieves all tags ordered by name
    fn get_all_tags(&self) -> Result<Vec<Tag>>;

    /// Updates an existing tag; fails with `NotFound` if it does not exist
    fn update_tag(&self, tag: &Tag) -> Result<()>;

    /// Deletes a tag; the tagged articles are left alone
    fn delete_tag(&self, id: &TagId) -> Result<()>;

    /// Retrieves all tags associated with a specific article
    fn get_article_tags(&self, article_id: &ArticleId) -> Result<Vec<Tag>>;

    /// Associates a tag with an article; adding twice is a no-op
    fn add_tag_to_article(&self, article_id: &ArticleId, tag_id: &TagId) -> Result<()>;

    /// Removes a tag association from an article
    fn remove_tag_from_article(&self, article_id: &ArticleId, tag_id: &TagId) -> Result<()>;

    /// Number of articles carrying the tag, drafts included
    fn count_tag_articles(&self, tag_id: &TagId) -> Result<usize>;
}
