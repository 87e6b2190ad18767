//! Cross-pass deduplication of extracted records.
//!
//! Overlapping scroll passes re-extract items that were already visible
//! earlier; the deduplicator decides which candidates are novel. The
//! fingerprint set is owned by the run that created it, so repeated or
//! concurrent runs cannot interfere with each other.

use std::collections::HashSet;

/// Set of content fingerprints accepted so far in one run.
///
/// The fingerprint is the cleaned `content` string itself, compared by
/// exact equality. Posts differing by a single character are distinct.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    /// Creates an empty deduplicator for a new run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and records the fingerprint if `content` has not
    /// been accepted before; returns false for duplicates.
    pub fn accept(&mut self, content: &str) -> bool {
        if self.seen.contains(content) {
            return false;
        }
        self.seen.insert(content.to_owned());
        true
    }

    /// Number of distinct fingerprints accepted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// True when no fingerprint has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
