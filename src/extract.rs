//! Per-snapshot record extraction.
//!
//! Each reveal-loop pass hands one snapshot of the content tree to
//! [`extract_records`], which walks the feed-item containers in
//! document order and produces candidate records. Extraction is
//! stateless per call: candidate indices are re-derived every pass and
//! only become final when the deduplicator accepts a candidate.

use dom_query::{Document, Selection};

use crate::options::Options;
use crate::parse::{
    clean_content, parse_comments, parse_impressions, parse_reactions, parse_reposts,
};
use crate::record::{Engagement, Record};

/// Extracts candidate records from one snapshot of the content tree.
///
/// One candidate per recognized feed item, numbered 1..N for this call.
/// Items whose content container is missing are skipped entirely.
/// When `options.capture_engagement` is set, each counter is read from
/// the first element matching its selector within the item; missing or
/// empty counter elements resolve to 0.
#[must_use]
pub fn extract_records(doc: &Document, options: &Options) -> Vec<Record> {
    let mut records = Vec::new();

    let items = doc.select(&options.item_selector);
    for node in items.nodes() {
        let item = Selection::from(*node);

        let content_el = item.select(&options.content_selector);
        if content_el.is_empty() {
            continue;
        }
        let content = clean_content(&content_el.text());

        let engagement = options.capture_engagement.then(|| Engagement {
            reactions: parse_reactions(&first_match_text(&item, &options.reactions_selector)),
            comments: parse_comments(&first_match_text(&item, &options.comments_selector)),
            reposts: parse_reposts(&first_match_text(&item, &options.reposts_selector)),
            impressions: parse_impressions(&first_match_text(
                &item,
                &options.impressions_selector,
            )),
        });

        records.push(Record {
            index: records.len() + 1,
            content,
            engagement,
        });
    }

    records
}

/// Text of the first element matching `selector` within `item`, or an
/// empty string when nothing matches.
fn first_match_text(item: &Selection, selector: &str) -> String {
    item.select(selector)
        .nodes()
        .first()
        .map(|node| Selection::from(*node).text().to_string())
        .unwrap_or_default()
}
