use slug::slugify;

/// Derives a URL-safe slug from a display name.
///
/// Diacritics are transliterated away, the result is lowercased and every
/// run of non-alphanumeric characters becomes a single hyphen. Uniqueness
/// is left to the storage layer.
pub fn derive_slug(name: &str) -> String {
    slugify(name)
}

/// Returns true if `slug` only contains `[a-z0-9-]` with no leading,
/// trailing or doubled hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        assert_eq!(derive_slug("Technology"), "technology");
        assert_eq!(derive_slug("Test Article"), "test-article");
        assert_eq!(derive_slug("World Cup"), "world-cup");
    }

    #[test]
    fn test_punctuation_runs_collapse() {
        assert_eq!(derive_slug("  Breaking -- News!!  "), "breaking-news");
        assert_eq!(derive_slug("C++ & Rust: 2024"), "c-rust-2024");
    }

    #[test]
    fn test_diacritics_are_normalized() {
        assert_eq!(derive_slug("Café Olé"), "cafe-ole");
        assert_eq!(derive_slug("Ünïcödé Straße"), "unicode-strasse");
    }

    #[test]
    fn test_derived_slugs_are_valid() {
        let names = [
            "Sports",
            "  --leading and trailing--  ",
            "Economía & Finanzas",
            "a__b..c",
            "42 Reasons Why",
        ];
        for name in names {
            let slug = derive_slug(name);
            assert!(is_valid_slug(&slug), "{name:?} -> {slug:?}");
        }
    }

    #[test]
    fn test_same_name_same_slug() {
        let first = derive_slug("Election Night Live");
        let second = derive_slug("Election Night Live");
        assert_eq!(first, second);
    }

    #[test]
    fn test_nothing_sluggable() {
        assert_eq!(derive_slug(""), "");
        assert_eq!(derive_slug("!!!"), "");
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn test_validate_slug() {
        assert!(is_valid_slug("world-cup-2026"));
        assert!(!is_valid_slug("World-Cup"));
        assert!(!is_valid_slug("-world"));
        assert!(!is_valid_slug("world-"));
        assert!(!is_valid_slug("world--cup"));
        assert!(!is_valid_slug("world cup"));
    }
}
