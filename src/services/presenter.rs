use serde::Serialize;

use crate::models::{Article, ArticleStatus};
use crate::services::browse::Page;
use crate::text::filters::{FilterRegistry, READING_TIME, TRUNCATE_WORDS_HTML};
use crate::utils::format_datetime;

/// What a listing shows for one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleCard {
    pub title: String,
    pub url: String,
    pub published_on: String,
    pub excerpt: String,
    pub reading_time: String,
    pub status: ArticleStatus,
    pub image: Option<String>,
}

/// Renders articles for display through the template filter registry
#[derive(Debug, Clone)]
pub struct Presenter {
    filters: FilterRegistry,
    excerpt_words: String,
}

impl Presenter {
    pub fn new(filters: FilterRegistry, excerpt_words: usize) -> Self {
        Self {
            filters,
            excerpt_words: excerpt_words.to_string(),
        }
    }

    pub fn card(&self, article: &Article) -> ArticleCard {
        ArticleCard {
            title: article.title.clone(),
            url: article.url_path(),
            published_on: format_datetime(article.published_at),
            excerpt: self.filters.apply(
                TRUNCATE_WORDS_HTML,
                &article.summary,
                Some(self.excerpt_words.as_str()),
            ),
            reading_time: self.filters.apply(READING_TIME, &article.content, None),
            status: article.status,
            image: article.image.clone(),
        }
    }

    pub fn cards(&self, page: Page<Article>) -> Page<ArticleCard> {
        page.map(|article| self.card(&article))
    }
}
