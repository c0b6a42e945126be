use std::sync::Arc;

use anyhow::Result;
use log::debug;
use serde::Serialize;

use crate::base::repository::{
    ArticleRepository,
    ArticleScope,
    CategoryRepository,
    ReporterRepository,
    TagRepository,
};
use crate::config::AppConfig;
use crate::data::Database;
use crate::models::{Article, Category, Reporter, ReporterId, Tag};

/// One page of a listing. Page numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub num_pages: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            num_pages: self.num_pages,
            total: self.total,
        }
    }
}

/// Number of pages needed for `total` items; an empty listing still has one page
fn page_count(total: usize, page_size: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    }
}

/// Categories and latest headlines shown next to every reader page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub categories: Vec<Category>,
    pub recent_articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub articles: Page<Article>,
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub category: Option<Category>,
    pub reporter: Option<Reporter>,
    pub tags: Vec<Tag>,
    pub related_articles: Vec<Article>,
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    pub category: Category,
    pub articles: Page<Article>,
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReporterPage {
    pub reporter: Reporter,
    pub articles: Page<Article>,
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPage {
    pub tag: Tag,
    pub articles: Page<Article>,
    pub sidebar: Sidebar,
}

/// Listing sizes used by the reader pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseLimits {
    pub page_size: usize,
    pub recent_articles: usize,
    pub related_articles: usize,
}

impl From<&AppConfig> for BrowseLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size.max(1),
            recent_articles: config.recent_articles,
            related_articles: config.related_articles,
        }
    }
}

impl Default for BrowseLimits {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

/// Reader-side queries behind the home, detail and listing pages.
///
/// Only published articles are ever returned. Lookups of unknown slugs or
/// ids, and page numbers past the end, give `None`.
#[derive(Clone)]
pub struct BrowseService {
    categories: Arc<dyn CategoryRepository>,
    reporters: Arc<dyn ReporterRepository>,
    articles: Arc<dyn ArticleRepository>,
    tags: Arc<dyn TagRepository>,
    limits: BrowseLimits,
}

impl BrowseService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        reporters: Arc<dyn ReporterRepository>,
        articles: Arc<dyn ArticleRepository>,
        tags: Arc<dyn TagRepository>,
        limits: BrowseLimits,
    ) -> Self {
        Self {
            categories,
            reporters,
            articles,
            tags,
            limits: BrowseLimits {
                page_size: limits.page_size.max(1),
                ..limits
            },
        }
    }

    pub fn from_database(database: &Database, limits: BrowseLimits) -> Self {
        Self::new(
            database.category_repository(),
            database.reporter_repository(),
            database.article_repository(),
            database.tag_repository(),
            limits,
        )
    }

    pub fn sidebar(&self) -> Result<Sidebar> {
        Ok(Sidebar {
            categories: self.categories.get_all_categories()?,
            recent_articles: self
                .articles
                .list_published(&ArticleScope::All, self.limits.recent_articles, 0)?,
        })
    }

    /// Published articles in `scope`, or `None` when `number` is out of range
    pub fn page(&self, scope: &ArticleScope, number: usize) -> Result<Option<Page<Article>>> {
        let total = self.articles.count_published(scope)?;
        let page_size = self.limits.page_size;
        let num_pages = page_count(total, page_size);

        if number == 0 || number > num_pages {
            debug!("Page {} requested, listing has {} page(s)", number, num_pages);
            return Ok(None);
        }

        let items = self
            .articles
            .list_published(scope, page_size, (number - 1) * page_size)?;
        Ok(Some(Page {
            items,
            number,
            num_pages,
            total,
        }))
    }

    pub fn home(&self, page: usize) -> Result<Option<HomePage>> {
        let Some(articles) = self.page(&ArticleScope::All, page)? else {
            return Ok(None);
        };
        Ok(Some(HomePage {
            articles,
            sidebar: self.sidebar()?,
        }))
    }

    pub fn article_detail(&self, slug: &str) -> Result<Option<ArticleDetail>> {
        let Some(article) = self.articles.get_published_by_slug(slug)? else {
            debug!("No published article with slug '{}'", slug);
            return Ok(None);
        };

        let category = self.categories.get_category_by_id(&article.category_id)?;
        let reporter = self.reporters.get_reporter_by_id(&article.reporter_id)?;
        let tags = self.tags.get_article_tags(&article.id)?;
        let related_articles = self
            .articles
            .get_related(&article, self.limits.related_articles)?;

        Ok(Some(ArticleDetail {
            article,
            category,
            reporter,
            tags,
            related_articles,
            sidebar: self.sidebar()?,
        }))
    }

    pub fn category_page(&self, slug: &str, page: usize) -> Result<Option<CategoryPage>> {
        let Some(category) = self.categories.get_category_by_slug(slug)? else {
            return Ok(None);
        };
        let Some(articles) = self.page(&ArticleScope::Category(category.id.clone()), page)? else {
            return Ok(None);
        };
        Ok(Some(CategoryPage {
            category,
            articles,
            sidebar: self.sidebar()?,
        }))
    }

    pub fn reporter_page(&self, id: &ReporterId, page: usize) -> Result<Option<ReporterPage>> {
        let Some(reporter) = self.reporters.get_reporter_by_id(id)? else {
            return Ok(None);
        };
        let Some(articles) = self.page(&ArticleScope::Reporter(reporter.id.clone()), page)? else {
            return Ok(None);
        };
        Ok(Some(ReporterPage {
            reporter,
            articles,
            sidebar: self.sidebar()?,
        }))
    }

    pub fn tag_page(&self, slug: &str, page: usize) -> Result<Option<TagPage>> {
        let Some(tag) = self.tags.get_tag_by_slug(slug)? else {
            return Ok(None);
        };
        let Some(articles) = self.page(&ArticleScope::Tag(tag.id.clone()), page)? else {
            return Ok(None);
        };
        Ok(Some(TagPage {
            tag,
            articles,
            sidebar: self.sidebar()?,
        }))
    }
}
