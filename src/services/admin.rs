use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::base::repository::{ArticleRepository, CategoryRepository, ReporterRepository, TagRepository};
use crate::data::Database;
use crate::models::{Article, ArticleStatus, CategoryId, ReporterId};

/// Article count as shown in admin listings: the number, or `-` for none
pub fn display_count(count: usize) -> String {
    if count > 0 {
        count.to_string()
    } else {
        "-".to_string()
    }
}

/// True when every whitespace-separated term of `query` occurs, ignoring
/// case, in at least one of `fields`. A missing or blank query matches all.
fn matches_search(query: Option<&str>, fields: &[&str]) -> bool {
    let Some(query) = query else {
        return true;
    };
    let fields: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| fields.iter().any(|field| field.contains(&term)))
}

/// Narrows the admin article listing. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub category: Option<CategoryId>,
    pub reporter: Option<ReporterId>,
    /// Matched against title, content and the reporter's username
    pub search: Option<String>,
}

impl ArticleFilter {
    fn keeps(&self, article: &Article, username: &str) -> bool {
        self.status.map_or(true, |status| article.status == status)
            && self.category.as_ref().map_or(true, |id| &article.category_id == id)
            && self.reporter.as_ref().map_or(true, |id| &article.reporter_id == id)
            && matches_search(
                self.search.as_deref(),
                &[&article.title, &article.content, username],
            )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub name: String,
    pub slug: String,
    pub article_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRow {
    pub name: String,
    pub slug: String,
    pub article_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReporterRow {
    pub username: String,
    pub display_name: String,
    pub article_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRow {
    pub title: String,
    pub reporter: String,
    pub category: String,
    pub status: ArticleStatus,
    pub published_at: DateTime<Utc>,
    pub image: String,
}

/// Editor-facing overview tables. Counts include drafts.
#[derive(Clone)]
pub struct AdminService {
    categories: Arc<dyn CategoryRepository>,
    reporters: Arc<dyn ReporterRepository>,
    articles: Arc<dyn ArticleRepository>,
    tags: Arc<dyn TagRepository>,
}

impl AdminService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        reporters: Arc<dyn ReporterRepository>,
        articles: Arc<dyn ArticleRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            categories,
            reporters,
            articles,
            tags,
        }
    }

    pub fn from_database(database: &Database) -> Self {
        Self::new(
            database.category_repository(),
            database.reporter_repository(),
            database.article_repository(),
            database.tag_repository(),
        )
    }

    /// Categories by name; `search` looks at name and description
    pub fn category_rows(&self, search: Option<&str>) -> Result<Vec<CategoryRow>> {
        self.categories
            .get_all_categories()?
            .into_iter()
            .filter(|category| matches_search(search, &[&category.name, &category.description]))
            .map(|category| {
                let count = self.articles.count_by_category(&category.id)?;
                Ok(CategoryRow {
                    name: category.name,
                    slug: category.slug,
                    article_count: display_count(count),
                })
            })
            .collect()
    }

    pub fn tag_rows(&self, search: Option<&str>) -> Result<Vec<TagRow>> {
        self.tags
            .get_all_tags()?
            .into_iter()
            .filter(|tag| matches_search(search, &[&tag.name]))
            .map(|tag| {
                let count = self.tags.count_tag_articles(&tag.id)?;
                Ok(TagRow {
                    name: tag.name,
                    slug: tag.slug,
                    article_count: display_count(count),
                })
            })
            .collect()
    }

    /// `search` looks at username, first and last name, and bio
    pub fn reporter_rows(&self, search: Option<&str>) -> Result<Vec<ReporterRow>> {
        self.reporters
            .get_all_reporters()?
            .into_iter()
            .filter(|reporter| {
                let account = &reporter.account;
                matches_search(
                    search,
                    &[&account.username, &account.first_name, &account.last_name, &reporter.bio],
                )
            })
            .map(|reporter| {
                let count = self.articles.count_by_reporter(&reporter.id)?;
                Ok(ReporterRow {
                    display_name: reporter.display_name(),
                    username: reporter.account.username,
                    article_count: display_count(count),
                })
            })
            .collect()
    }

    /// Articles newest first, drafts included, narrowed by `filter`
    pub fn article_rows(&self, filter: &ArticleFilter) -> Result<Vec<ArticleRow>> {
        let categories = self.categories.get_all_categories()?;
        let reporters = self.reporters.get_all_reporters()?;

        Ok(self
            .articles
            .get_all_articles()?
            .into_iter()
            .filter_map(|article| {
                let reporter = reporters.iter().find(|r| r.id == article.reporter_id);
                let username = reporter.map(|r| r.account.username.as_str()).unwrap_or_default();
                if !filter.keeps(&article, username) {
                    return None;
                }
                let category = categories
                    .iter()
                    .find(|c| c.id == article.category_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                let reporter = reporter.map(|r| r.display_name()).unwrap_or_default();
                Some(ArticleRow {
                    title: article.title,
                    reporter,
                    category,
                    status: article.status,
                    published_at: article.published_at,
                    image: article.image.unwrap_or_else(|| "No image".to_string()),
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Article, Category, Reporter, Tag};
    use crate::services::PublishingService;

    #[test]
    fn test_display_count() {
        assert_eq!(display_count(0), "-");
        assert_eq!(display_count(1), "1");
        assert_eq!(display_count(12), "12");
    }

    #[test]
    fn test_rows() {
        let database = Database::in_memory().unwrap();
        let publishing = PublishingService::from_database(&database);
        let admin = AdminService::from_database(&database);

        let account = publishing
            .create_account(
                Account::new("jdoe".to_string()).with_name("Jane".to_string(), "Doe".to_string()),
            )
            .unwrap();
        let jane = publishing.create_reporter(Reporter::new(account)).unwrap();
        let idle = publishing
            .create_account(Account::new("idle".to_string()))
            .and_then(|account| publishing.create_reporter(Reporter::new(account)))
            .unwrap();
        let sports = publishing.create_category(Category::new("Sports".to_string())).unwrap();
        publishing.create_category(Category::new("Arts".to_string())).unwrap();
        let football = publishing.create_tag(Tag::new("Football".to_string())).unwrap();

        let article = publishing
            .create_article(
                Article::new("Derby Day".to_string(), "body".to_string(), sports.id.clone(), jane.id.clone())
                    .with_image("articles/derby.jpg".to_string()),
            )
            .unwrap();
        publishing
            .create_article(Article::new("Draft Notes".to_string(), "notes".to_string(), sports.id.clone(), jane.id.clone()))
            .unwrap();
        publishing.tag_article(&article.id, &football.id).unwrap();

        let categories = admin.category_rows(None).unwrap();
        assert_eq!(
            categories,
            vec![
                CategoryRow { name: "Arts".to_string(), slug: "arts".to_string(), article_count: "-".to_string() },
                CategoryRow { name: "Sports".to_string(), slug: "sports".to_string(), article_count: "2".to_string() },
            ]
        );

        let tags = admin.tag_rows(None).unwrap();
        assert_eq!(tags[0].article_count, "1");

        let reporters = admin.reporter_rows(None).unwrap();
        assert_eq!(reporters.len(), 2);
        assert_eq!(reporters[0].username, "idle");
        assert_eq!(reporters[0].display_name, "idle");
        assert_eq!(reporters[0].article_count, "-");
        assert_eq!(reporters[1].display_name, "Jane Doe");
        assert_eq!(reporters[1].article_count, "2");
        assert_eq!(idle.display_name(), "idle");

        let articles = admin.article_rows(&ArticleFilter::default()).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Draft Notes");
        assert_eq!(articles[0].image, "No image");
        assert_eq!(articles[1].reporter, "Jane Doe");
        assert_eq!(articles[1].category, "Sports");
        assert_eq!(articles[1].image, "articles/derby.jpg");
    }

    #[test]
    fn test_search_terms() {
        assert!(matches_search(None, &["anything"]));
        assert!(matches_search(Some("  "), &["anything"]));
        assert!(matches_search(Some("DERBY day"), &["Derby Day", ""]));
        assert!(matches_search(Some("derby jdoe"), &["Derby Day", "jdoe"]));
        assert!(!matches_search(Some("derby night"), &["Derby Day", "jdoe"]));
    }

    #[test]
    fn test_filtered_rows() {
        let database = Database::in_memory().unwrap();
        let publishing = PublishingService::from_database(&database);
        let admin = AdminService::from_database(&database);

        let jane = publishing
            .create_account(Account::new("jdoe".to_string()).with_name("Jane".to_string(), "Doe".to_string()))
            .and_then(|account| publishing.create_reporter(Reporter::new(account).with_bio("Covers football".to_string())))
            .unwrap();
        let sam = publishing
            .create_account(Account::new("sam".to_string()))
            .and_then(|account| publishing.create_reporter(Reporter::new(account)))
            .unwrap();
        let sports = publishing
            .create_category(Category::new("Sports".to_string()).with_description("Matches and results".to_string()))
            .unwrap();
        let arts = publishing.create_category(Category::new("Arts".to_string())).unwrap();
        publishing.create_tag(Tag::new("Football".to_string())).unwrap();
        publishing.create_tag(Tag::new("Opera".to_string())).unwrap();

        publishing
            .create_article(
                Article::new("Derby Day".to_string(), "A tense match".to_string(), sports.id.clone(), jane.id.clone())
                    .with_status(ArticleStatus::Published),
            )
            .unwrap();
        publishing
            .create_article(Article::new("Cup Draw".to_string(), "Pending".to_string(), sports.id.clone(), sam.id.clone()))
            .unwrap();
        publishing
            .create_article(
                Article::new("Opera Night".to_string(), "A review".to_string(), arts.id.clone(), jane.id.clone())
                    .with_status(ArticleStatus::Published),
            )
            .unwrap();

        let titles = |filter: ArticleFilter| -> Vec<String> {
            let mut titles: Vec<String> = admin.article_rows(&filter).unwrap().into_iter().map(|row| row.title).collect();
            titles.sort();
            titles
        };

        assert_eq!(
            titles(ArticleFilter { status: Some(ArticleStatus::Published), ..Default::default() }),
            vec!["Derby Day", "Opera Night"]
        );
        assert_eq!(
            titles(ArticleFilter { category: Some(sports.id.clone()), ..Default::default() }),
            vec!["Cup Draw", "Derby Day"]
        );
        assert_eq!(
            titles(ArticleFilter { reporter: Some(sam.id.clone()), ..Default::default() }),
            vec!["Cup Draw"]
        );
        assert_eq!(
            titles(ArticleFilter { search: Some("JDOE".to_string()), ..Default::default() }),
            vec!["Derby Day", "Opera Night"]
        );
        assert_eq!(
            titles(ArticleFilter {
                status: Some(ArticleStatus::Published),
                category: Some(sports.id.clone()),
                search: Some("tense".to_string()),
                ..Default::default()
            }),
            vec!["Derby Day"]
        );

        let categories = admin.category_rows(Some("results")).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Sports");

        let tags = admin.tag_rows(Some("foot")).unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Football");

        let reporters = admin.reporter_rows(Some("football")).unwrap();
        assert_eq!(reporters.len(), 1);
        assert_eq!(reporters[0].username, "jdoe");
        assert_eq!(admin.reporter_rows(Some("doe")).unwrap().len(), 1);
    }
}
