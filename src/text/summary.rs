/// Number of words kept when a summary is derived from content.
pub const SUMMARY_WORDS: usize = 100;

const ELLIPSIS: &str = "...";

/// Builds a teaser from the first hundred words of `content`.
///
/// The ellipsis is appended whenever content is non-empty, even when the
/// whole text fits. Empty content gives an empty summary.
pub fn extract_summary(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let words: Vec<&str> = content.split_whitespace().take(SUMMARY_WORDS).collect();
    let mut summary = words.join(" ");
    summary.push_str(ELLIPSIS);
    summary
}
