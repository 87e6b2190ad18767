//! Compiled regex patterns for counter text and hashtag detection.
//!
//! All patterns are compiled once at startup using `LazyLock`.
//! Counter patterns accept digit groups with comma separators; the
//! separators are stripped before numeric parsing.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a line that is a hashtag: `#` followed by a word character.
///
/// Lines matching this are segregated to the trailing hashtag block
/// during content cleaning; everything else is body text.
pub static HASHTAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#\w").expect("HASHTAG_LINE regex"));

/// Matches the "`<name> and <N> others`" reaction summary form.
///
/// Captures the trailing count. The name part is deliberately loose:
/// anything before the final `and <N> others` is accepted.
pub static REACTION_OTHERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\band\b.*?(\d[\d,]*)\s*others\b").expect("REACTION_OTHERS regex")
});

/// Matches the first integer anywhere in a text fragment (fallback for
/// bare reaction counts).
pub static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("FIRST_INTEGER regex"));

/// Matches an integer immediately preceding "comment"/"comments".
pub static COMMENT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d[\d,]*)\s*comments?\b").expect("COMMENT_COUNT regex")
});

/// Matches an integer immediately preceding "repost"/"reposts".
pub static REPOST_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d[\d,]*)\s*reposts?\b").expect("REPOST_COUNT regex")
});

/// Matches an integer immediately preceding "impression"/"impressions".
pub static IMPRESSION_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d[\d,]*)\s*impressions?\b").expect("IMPRESSION_COUNT regex")
});
