use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::reading_time::reading_time;
use super::truncate::truncate_html;

/// A named template filter: takes the value being rendered plus an optional
/// argument and returns the rendered text.
pub type FilterFn = fn(&str, Option<&str>) -> String;

pub const TRUNCATE_WORDS_HTML: &str = "truncate_words_html";
pub const READING_TIME: &str = "reading_time";

/// Lookup table from filter names to filter functions.
///
/// Built once at start-up and shared read-only by every render call.
#[derive(Clone, Default)]
pub struct FilterRegistry {
    filters: HashMap<&'static str, FilterFn>,
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.filters.keys().collect();
        names.sort();
        f.debug_struct("FilterRegistry").field("filters", &names).finish()
    }
}

impl FilterRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the article filters
    pub fn with_builtin_filters() -> Self {
        let mut registry = Self::new();
        registry.register(TRUNCATE_WORDS_HTML, truncate_words_html_filter);
        registry.register(READING_TIME, reading_time_filter);
        registry
    }

    /// Registers `filter` under `name`, replacing any previous entry
    pub fn register(&mut self, name: &'static str, filter: FilterFn) {
        self.filters.insert(name, filter);
    }

    pub fn get(&self, name: &str) -> Option<FilterFn> {
        self.filters.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Applies the filter called `name`, or returns `value` unchanged when no
    /// such filter is registered.
    pub fn apply(&self, name: &str, value: &str, arg: Option<&str>) -> String {
        match self.get(name) {
            Some(filter) => filter(value, arg),
            None => {
                debug!("No template filter named '{}', rendering value as-is", name);
                value.to_string()
            }
        }
    }
}

fn truncate_words_html_filter(value: &str, arg: Option<&str>) -> String {
    // A missing argument cannot be parsed as a length either.
    match arg {
        Some(length) => truncate_html(value, length),
        None => value.to_string(),
    }
}

fn reading_time_filter(value: &str, _arg: Option<&str>) -> String {
    reading_time(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(value: &str, _arg: Option<&str>) -> String {
        value.to_uppercase()
    }

    #[test]
    fn test_builtin_filters_registered() {
        let registry = FilterRegistry::with_builtin_filters();
        assert!(registry.contains(TRUNCATE_WORDS_HTML));
        assert!(registry.contains(READING_TIME));
        assert!(!FilterRegistry::new().contains(READING_TIME));
    }

    #[test]
    fn test_apply_truncate() {
        let registry = FilterRegistry::with_builtin_filters();
        assert_eq!(
            registry.apply(TRUNCATE_WORDS_HTML, "<p>one two three</p>", Some("2")),
            "<p>one two..."
        );
        assert_eq!(
            registry.apply(TRUNCATE_WORDS_HTML, "<p>one two three</p>", Some("abc")),
            "<p>one two three</p>"
        );
        assert_eq!(
            registry.apply(TRUNCATE_WORDS_HTML, "<p>one two three</p>", None),
            "<p>one two three</p>"
        );
    }

    #[test]
    fn test_apply_reading_time() {
        let registry = FilterRegistry::with_builtin_filters();
        assert_eq!(registry.apply(READING_TIME, "", None), "0 min read");
        assert_eq!(registry.apply(READING_TIME, "a few words", Some("ignored")), "1 min read");
    }

    #[test]
    fn test_unknown_filter_returns_value() {
        let registry = FilterRegistry::with_builtin_filters();
        assert_eq!(registry.apply("slugify", "Some <b>Text</b>", Some("3")), "Some <b>Text</b>");
    }

    #[test]
    fn test_register_custom_filter() {
        let mut registry = FilterRegistry::new();
        registry.register("shout", shout);
        assert_eq!(registry.apply("shout", "quiet", None), "QUIET");

        let filter = registry.get("shout").map(|f| f("again", None));
        assert_eq!(filter.as_deref(), Some("AGAIN"));
    }
}
