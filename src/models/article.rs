use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryId;
use super::reporter::ReporterId;
use crate::error::StoreError;
use crate::text::{derive_slug, extract_summary};

/// Unique identifier for articles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub String);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication state. Only published articles reach readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "Draft",
            ArticleStatus::Published => "Published",
        }
    }
}

impl FromStr for ArticleStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            other => Err(StoreError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier for the article
    pub id: ArticleId,
    /// Headline
    pub title: String,
    /// URL slug, unique among articles
    pub slug: String,
    /// Full body, may contain HTML
    pub content: String,
    /// Teaser shown in listings
    pub summary: String,
    /// Relative path of the lead image, if any
    pub image: Option<String>,
    pub status: ArticleStatus,
    pub category_id: CategoryId,
    pub reporter_id: ReporterId,
    /// Set once when the article is first created
    pub published_at: DateTime<Utc>,
    /// Refreshed on every save
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Creates a draft article in the given category, written by the given reporter
    pub fn new(title: String, content: String, category_id: CategoryId, reporter_id: ReporterId) -> Self {
        let now = Utc::now();
        Self {
            id: ArticleId(Uuid::new_v4().to_string()),
            title,
            slug: String::new(),
            content,
            summary: String::new(),
            image: None,
            status: ArticleStatus::Draft,
            category_id,
            reporter_id,
            published_at: now,
            updated_at: now,
        }
    }

    pub fn with_slug(mut self, slug: String) -> Self {
        self.slug = slug;
        self
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    /// Fills in the slug from the title and the summary from the content,
    /// each only when blank.
    pub fn fill_derived_fields(&mut self) {
        if self.slug.is_empty() {
            self.slug = derive_slug(&self.title);
        }
        if self.summary.is_empty() && !self.content.is_empty() {
            self.summary = extract_summary(&self.content);
        }
    }

    /// Marks the article as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn url_path(&self) -> String {
        format!("/article/{}/", self.slug)
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
