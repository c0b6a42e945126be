/// Assumed reading speed.
pub const WORDS_PER_MINUTE: usize = 200;

/// Whole minutes needed to read `text`, never less than one.
pub fn reading_minutes(text: &str) -> usize {
    let words = text.split_whitespace().count();
    (words / WORDS_PER_MINUTE).max(1)
}

/// Renders the reading-time badge for `text`, e.g. `"3 min read"`.
///
/// Empty text is special-cased to `"0 min read"`; anything else reads for
/// at least one minute.
pub fn reading_time(text: &str) -> String {
    if text.is_empty() {
        return "0 min read".to_string();
    }

    match reading_minutes(text) {
        1 => "1 min read".to_string(),
        minutes => format!("{minutes} min read"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(reading_time(""), "0 min read");
    }

    #[test]
    fn test_short_text_floors_to_one_minute() {
        assert_eq!(reading_time("just a few words"), "1 min read");
        assert_eq!(reading_time(&words(199)), "1 min read");
        assert_eq!(reading_time("   "), "1 min read");
    }

    #[test]
    fn test_integer_division() {
        assert_eq!(reading_time(&words(200)), "1 min read");
        assert_eq!(reading_time(&words(399)), "1 min read");
        assert_eq!(reading_time(&words(400)), "2 min read");
        assert_eq!(reading_time(&words(1450)), "7 min read");
    }

    #[test]
    fn test_reading_minutes() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes(&words(600)), 3);
    }
}
