use anyhow::Result;

use crate::models::article::{Article, ArticleId};
use crate::models::category::CategoryId;
use crate::models::reporter::ReporterId;
use crate::models::tag::TagId;

/// Which published articles a listing covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleScope {
    All,
    Category(CategoryId),
    Reporter(ReporterId),
    Tag(TagId),
}

/// Trait defining the interface for article repository implementations
pub trait ArticleRepository: Send + Sync {
    /// Saves a new article; fails with `DuplicateSlug` on a slug collision
    fn save_article(&self, article: &Article) -> Result<()>;

    /// Updates an existing article; fails with `NotFound` if it does not exist
    fn update_article(&self, article: &Article) -> Result<()>;

    /// Deletes an article and its tag associations
    fn delete_article(&self, id: &ArticleId) -> Result<()>;

    /// Retrieves an article by ID, whatever its status
    fn get_article(&self, id: &ArticleId) -> Result<Option<Article>>;

    /// Retrieves every article, newest first, whatever its status
    fn get_all_articles(&self) -> Result<Vec<Article>>;

    /// Retrieves a published article by slug
    fn get_published_by_slug(&self, slug: &str) -> Result<Option<Article>>;

    /// Counts the published articles in `scope`
    fn count_published(&self, scope: &ArticleScope) -> Result<usize>;

    /// Lists published articles in `scope`, newest first
    fn list_published(&self, scope: &ArticleScope, limit: usize, offset: usize) -> Result<Vec<Article>>;

    /// Published articles in the same category as `article`, excluding it
    fn get_related(&self, article: &Article, limit: usize) -> Result<Vec<Article>>;

    /// Number of articles filed under a category, drafts included
    fn count_by_category(&self, category_id: &CategoryId) -> Result<usize>;

    /// Number of articles written by a reporter, drafts included
    fn count_by_reporter(&self, reporter_id: &ReporterId) -> Result<usize>;
}
