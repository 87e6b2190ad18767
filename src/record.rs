//! Output types: extracted records and the run report.

use serde::{Deserialize, Serialize};

/// One extracted feed item.
///
/// `content` is the deduplication key: two records with identical
/// cleaned content are the same logical post regardless of differing
/// counters or index. `index` is assigned at acceptance time, 1-based,
/// in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based position in the result sequence, assigned at acceptance.
    pub index: usize,

    /// Cleaned body text with hashtags segregated to a trailing line.
    pub content: String,

    /// Engagement counters, present only when the run captures them.
    /// Flattened so the JSON object stays flat:
    /// `index, content, reactions, comments, reposts, impressions`.
    /// A `None` here serializes to no additional keys at all.
    #[serde(flatten)]
    pub engagement: Option<Engagement>,
}

/// Engagement counters for a feed item.
///
/// All counters are non-negative and default to 0 when the host markup
/// lacks the corresponding element or its text is unparsable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub reactions: u64,
    pub comments: u64,
    pub reposts: u64,
    pub impressions: u64,
}

/// Outcome of one reveal-and-extract run.
///
/// There is no error form: a run that hit the iteration cap and a run
/// that observed feed exhaustion both yield whatever was accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Accepted records in first-acceptance order.
    pub records: Vec<Record>,

    /// Number of reveal-loop passes executed.
    pub iterations: u32,

    /// True when the run ended by observing `stable_limit` consecutive
    /// passes without growth; false when the iteration cap fired first.
    pub exhausted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_engagement_serializes_two_keys() {
        let record = Record {
            index: 1,
            content: "hello".into(),
            engagement: None,
        };
        let json = serde_json::to_value(&record).expect("serialize");
        let obj = json.as_object().expect("object");
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("index"));
        assert!(obj.contains_key("content"));
    }

    #[test]
    fn record_with_engagement_flattens_counters() {
        let record = Record {
            index: 2,
            content: "hello".into(),
            engagement: Some(Engagement {
                reactions: 3,
                comments: 1,
                reposts: 0,
                impressions: 120,
            }),
        };
        let json = serde_json::to_value(&record).expect("serialize");
        let obj = json.as_object().expect("object");
        assert_eq!(obj["reactions"], 3);
        assert_eq!(obj["impressions"], 120);

        let back: Record = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, record);
    }
}
