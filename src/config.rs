use serde::Deserialize;

/// Runtime settings, read from `NEWSROOM_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Articles per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Entries in the sidebar's recent articles list
    #[serde(default = "default_recent_articles")]
    pub recent_articles: usize,
    /// Same-category articles shown under an article
    #[serde(default = "default_related_articles")]
    pub related_articles: usize,
    /// Word limit for article card excerpts
    #[serde(default = "default_excerpt_words")]
    pub excerpt_words: usize,
}

fn default_database_path() -> String {
    "data/newsroom.db".to_string()
}

fn default_page_size() -> usize {
    5
}

fn default_recent_articles() -> usize {
    5
}

fn default_related_articles() -> usize {
    3
}

fn default_excerpt_words() -> usize {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            page_size: default_page_size(),
            recent_articles: default_recent_articles(),
            related_articles: default_related_articles(),
            excerpt_words: default_excerpt_words(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix("NEWSROOM"))
    }

    fn from_source(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("NEWSROOM").source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_source(env(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 5);
        assert_eq!(config.related_articles, 3);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_source(env(&[
            ("NEWSROOM_DATABASE_PATH", "/tmp/news.db"),
            ("NEWSROOM_PAGE_SIZE", "10"),
            ("NEWSROOM_EXCERPT_WORDS", "12"),
        ]))
        .unwrap();
        assert_eq!(config.database_path, "/tmp/news.db");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.excerpt_words, 12);
        assert_eq!(config.recent_articles, 5);
    }

    #[test]
    fn test_bad_number_is_an_error() {
        assert!(AppConfig::from_source(env(&[("NEWSROOM_PAGE_SIZE", "many")])).is_err());
    }
}
