//! Field parsing: content cleaning and engagement counter extraction.
//!
//! These are pure, stateless text transformations. Counter parsing is
//! defensive by contract: a missing element, an empty string, or text
//! with no matching integer always resolves to 0, never to an error.

use crate::patterns::{
    COMMENT_COUNT, FIRST_INTEGER, HASHTAG_LINE, IMPRESSION_COUNT, REACTION_OTHERS, REPOST_COUNT,
};

/// Literal marker word some hosts render as a label before hashtag
/// links. Compared case-insensitively and dropped during cleaning.
const HASHTAG_MARKER: &str = "hashtag";

/// Cleans raw feed-item text into the canonical content form.
///
/// Lines are trimmed; empty lines and the hashtag marker word are
/// dropped. Remaining lines are partitioned into body lines and
/// hashtag lines (`#` + word character). Body lines are rejoined with
/// a blank line between each; hashtag lines, if any, follow as one
/// trailing line joined by single spaces.
///
/// # Example
///
/// ```rust
/// use feedrake::parse::clean_content;
///
/// let raw = "Hello\n\nHASHTAG\n#ai\n#ml\nWorld";
/// assert_eq!(clean_content(raw), "Hello\n\nWorld\n\n#ai #ml");
/// ```
#[must_use]
pub fn clean_content(raw: &str) -> String {
    let mut body: Vec<&str> = Vec::new();
    let mut hashtags: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case(HASHTAG_MARKER) {
            continue;
        }
        if HASHTAG_LINE.is_match(line) {
            hashtags.push(line);
        } else {
            body.push(line);
        }
    }

    let mut cleaned = body.join("\n\n");
    if !hashtags.is_empty() {
        if !cleaned.is_empty() {
            cleaned.push_str("\n\n");
        }
        cleaned.push_str(&hashtags.join(" "));
    }
    cleaned
}

/// Parses a reaction count.
///
/// The "`<name> and <N> others`" summary form takes precedence; failing
/// that, the first integer anywhere in the text is used. No integer
/// yields 0.
#[must_use]
pub fn parse_reactions(text: &str) -> u64 {
    if let Some(caps) = REACTION_OTHERS.captures(text) {
        return parse_grouped(&caps[1]);
    }
    FIRST_INTEGER
        .find(text)
        .map_or(0, |m| parse_grouped(m.as_str()))
}

/// Parses a comment count: the first integer immediately preceding
/// "comment" or "comments". Absent or malformed text yields 0.
#[must_use]
pub fn parse_comments(text: &str) -> u64 {
    COMMENT_COUNT
        .captures(text)
        .map_or(0, |caps| parse_grouped(&caps[1]))
}

/// Parses a repost count: the first integer immediately preceding
/// "repost" or "reposts". Absent or malformed text yields 0.
#[must_use]
pub fn parse_reposts(text: &str) -> u64 {
    REPOST_COUNT
        .captures(text)
        .map_or(0, |caps| parse_grouped(&caps[1]))
}

/// Parses an impression count: the first integer immediately preceding
/// "impression" or "impressions", with thousands separators stripped.
/// Absent or malformed text yields 0.
#[must_use]
pub fn parse_impressions(text: &str) -> u64 {
    IMPRESSION_COUNT
        .captures(text)
        .map_or(0, |caps| parse_grouped(&caps[1]))
}

/// Strips digit-group separators and parses. Anything that still fails
/// to parse (overflow included) resolves to 0.
fn parse_grouped(digits: &str) -> u64 {
    digits.replace(',', "").parse().unwrap_or(0)
}
