use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::base::repository::{
    AccountRepository,
    ArticleRepository,
    CategoryRepository,
    ReporterRepository,
    TagRepository,
};
use crate::data::Database;
use crate::error::{EntityKind, StoreError};
use crate::models::{
    Account, AccountId, Article, ArticleId, Category, CategoryId, Reporter, ReporterId, Tag, TagId,
};
use crate::text::is_valid_slug;

/// Editor-side write path.
///
/// Every save fills in derived fields (slug, article summary) when they are
/// blank, then hands the record to storage. Slug collisions come back as
/// `StoreError::DuplicateSlug`.
#[derive(Clone)]
pub struct PublishingService {
    accounts: Arc<dyn AccountRepository>,
    categories: Arc<dyn CategoryRepository>,
    reporters: Arc<dyn ReporterRepository>,
    articles: Arc<dyn ArticleRepository>,
    tags: Arc<dyn TagRepository>,
}

/// Derived slugs are always well formed; this catches empty derivations and
/// hand-supplied slugs that are not.
fn require_slug(kind: EntityKind, slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(StoreError::MissingSlug { kind }.into());
    }
    if !is_valid_slug(slug) {
        return Err(StoreError::InvalidSlug {
            kind,
            slug: slug.to_string(),
        }
        .into());
    }
    Ok(())
}

impl PublishingService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        categories: Arc<dyn CategoryRepository>,
        reporters: Arc<dyn ReporterRepository>,
        articles: Arc<dyn ArticleRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            accounts,
            categories,
            reporters,
            articles,
            tags,
        }
    }

    pub fn from_database(database: &Database) -> Self {
        Self::new(
            database.account_repository(),
            database.category_repository(),
            database.reporter_repository(),
            database.article_repository(),
            database.tag_repository(),
        )
    }

    pub fn create_account(&self, account: Account) -> Result<Account> {
        self.accounts.save_account(&account)?;
        info!("Created account '{}'", account.username);
        Ok(account)
    }

    pub fn delete_account(&self, id: &AccountId) -> Result<()> {
        self.accounts.delete_account(id)?;
        info!("Deleted account {}", id);
        Ok(())
    }

    pub fn create_category(&self, mut category: Category) -> Result<Category> {
        category.fill_derived_fields();
        require_slug(EntityKind::Category, &category.slug)?;
        self.categories.save_category(&category)?;
        info!("Created category '{}' ({})", category.name, category.slug);
        Ok(category)
    }

    pub fn update_category(&self, mut category: Category) -> Result<Category> {
        category.fill_derived_fields();
        require_slug(EntityKind::Category, &category.slug)?;
        self.categories.update_category(&category)?;
        Ok(category)
    }

    /// Deletes the category along with every article filed under it
    pub fn delete_category(&self, id: &CategoryId) -> Result<()> {
        self.categories.delete_category(id)?;
        info!("Deleted category {}", id);
        Ok(())
    }

    pub fn create_reporter(&self, reporter: Reporter) -> Result<Reporter> {
        self.reporters.save_reporter(&reporter)?;
        info!("Created reporter '{}'", reporter.display_name());
        Ok(reporter)
    }

    pub fn update_reporter(&self, reporter: Reporter) -> Result<Reporter> {
        self.reporters.update_reporter(&reporter)?;
        Ok(reporter)
    }

    /// Deletes the reporter along with every article they wrote
    pub fn delete_reporter(&self, id: &ReporterId) -> Result<()> {
        self.reporters.delete_reporter(id)?;
        info!("Deleted reporter {}", id);
        Ok(())
    }

    pub fn create_article(&self, mut article: Article) -> Result<Article> {
        article.fill_derived_fields();
        require_slug(EntityKind::Article, &article.slug)?;
        self.articles.save_article(&article)?;
        info!("Created {} article '{}' ({})", article.status, article.title, article.slug);
        Ok(article)
    }

    pub fn update_article(&self, mut article: Article) -> Result<Article> {
        article.fill_derived_fields();
        require_slug(EntityKind::Article, &article.slug)?;
        article.touch();
        self.articles.update_article(&article)?;
        Ok(article)
    }

    pub fn delete_article(&self, id: &ArticleId) -> Result<()> {
        self.articles.delete_article(id)?;
        info!("Deleted article {}", id);
        Ok(())
    }

    pub fn create_tag(&self, mut tag: Tag) -> Result<Tag> {
        tag.fill_derived_fields();
        require_slug(EntityKind::Tag, &tag.slug)?;
        self.tags.save_tag(&tag)?;
        info!("Created tag '{}' ({})", tag.name, tag.slug);
        Ok(tag)
    }

    pub fn update_tag(&self, mut tag: Tag) -> Result<Tag> {
        tag.fill_derived_fields();
        require_slug(EntityKind::Tag, &tag.slug)?;
        self.tags.update_tag(&tag)?;
        Ok(tag)
    }

    /// Deletes the tag; the articles it was attached to stay
    pub fn delete_tag(&self, id: &TagId) -> Result<()> {
        self.tags.delete_tag(id)?;
        info!("Deleted tag {}", id);
        Ok(())
    }

    /// Attaches `tag_id` to the article. Attaching twice is harmless.
    pub fn tag_article(&self, article_id: &ArticleId, tag_id: &TagId) -> Result<()> {
        if self.articles.get_article(article_id)?.is_none() {
            return Err(StoreError::NotFound {
                kind: EntityKind::Article,
                key: article_id.to_string(),
            }
            .into());
        }
        if self.tags.get_tag_by_id(tag_id)?.is_none() {
            return Err(StoreError::NotFound {
                kind: EntityKind::Tag,
                key: tag_id.to_string(),
            }
            .into());
        }
        self.tags.add_tag_to_article(article_id, tag_id)
    }

    pub fn untag_article(&self, article_id: &ArticleId, tag_id: &TagId) -> Result<()> {
        self.tags.remove_tag_from_article(article_id, tag_id)
    }
}
