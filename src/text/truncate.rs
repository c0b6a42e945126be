//! Word truncation for strings that carry HTML markup.
//!
//! The input is split into tag tokens (`<...>`) and word tokens (runs of
//! characters that are neither whitespace nor angle brackets). Tags always
//! pass through untouched and only words count toward the limit. Once the
//! limit is exceeded the output is cut right before the offending word and
//! `...` is appended. Tags that would have closed earlier ones are dropped
//! along with the rest, so the result may leave elements open.

use std::num::IntErrorKind;
use std::ops::Range;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Tag,
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideTag,
    InsideTag { start: usize },
}

/// Two-state scanner over the tag/word token stream of an HTML string.
///
/// A `<` opens a tag that runs to the next `>`. A `<` with no `>` anywhere
/// after it is not a tag; it is skipped like whitespace and scanning
/// resumes right after it. `<>` is not a tag either.
struct Tokens<'a> {
    input: &'a str,
    pos: usize,
    // Set once a `<` has been found with no `>` after it, so no later `<`
    // can open a tag.
    unterminated: bool,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            unterminated: false,
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut state = ScanState::OutsideTag;
        let mut word_start = None;

        while let Some(ch) = self.input[self.pos..].chars().next() {
            let i = self.pos;
            match state {
                ScanState::OutsideTag => {
                    let separator = ch == '<' || ch == '>' || ch.is_whitespace();
                    if let Some(start) = word_start {
                        if separator {
                            return Some(Token {
                                kind: TokenKind::Word,
                                span: start..i,
                            });
                        }
                    } else if ch == '<' && !self.unterminated {
                        state = ScanState::InsideTag { start: i };
                    } else if !separator {
                        word_start = Some(i);
                    }
                    self.pos += ch.len_utf8();
                }
                ScanState::InsideTag { start } => {
                    self.pos += ch.len_utf8();
                    if ch == '>' {
                        if i > start + 1 {
                            return Some(Token {
                                kind: TokenKind::Tag,
                                span: start..self.pos,
                            });
                        }
                        state = ScanState::OutsideTag;
                    }
                }
            }
        }

        match state {
            ScanState::OutsideTag => word_start.map(|start| Token {
                kind: TokenKind::Word,
                span: start..self.input.len(),
            }),
            ScanState::InsideTag { start } => {
                // Ran off the end looking for `>`: rescan from just past the `<`.
                self.unterminated = true;
                self.pos = start + 1;
                self.next()
            }
        }
    }
}

/// Truncates `value` to at most `words` words, keeping every tag seen
/// before the cut.
pub fn truncate_html_words(value: &str, words: usize) -> String {
    if value.is_empty() {
        return String::new();
    }

    let mut count = 0;
    for token in Tokens::new(value) {
        if token.kind == TokenKind::Word {
            count += 1;
            if count > words {
                let mut truncated = value[..token.span.start].trim_end().to_string();
                truncated.push_str(ELLIPSIS);
                return truncated;
            }
        }
    }

    value.to_string()
}

/// Template-facing form of [`truncate_html_words`] taking the word count as
/// text. An argument that does not parse as an integer leaves `value`
/// untouched; a negative count behaves like zero, however large.
pub fn truncate_html(value: &str, length: &str) -> String {
    let words = match length.trim().parse::<i64>() {
        Ok(length) => usize::try_from(length).unwrap_or(0),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => usize::MAX,
            IntErrorKind::NegOverflow => 0,
            _ => return value.to_string(),
        },
    };

    truncate_html_words(value, words)
}
