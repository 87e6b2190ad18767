//! Serialization of the final result sequence to JSON and CSV, and the
//! file-sink contract for delivering the documents.
//!
//! Both encodings are produced from the same sequence and agree on
//! record count and relative order. Key order is stable:
//! `index, content[, reactions, comments, reposts, impressions]`.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::options::Options;
use crate::progress::{ProgressSink, Severity};
use crate::record::Record;

/// Media type of the JSON export.
pub const JSON_MIME: &str = "application/json";

/// Media type of the CSV export.
pub const CSV_MIME: &str = "text/csv";

/// Destination for exported documents.
///
/// The core hands over bytes, a suggested filename, and a media type;
/// whether and where the host actually saves them is its own business.
pub trait FileSink {
    /// Persists one exported document.
    fn save(&mut self, bytes: &[u8], suggested_filename: &str, mime_type: &str) -> Result<()>;
}

/// File sink writing each document into a directory, keeping the
/// suggested filename.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Creates a sink that writes into `dir` (which must exist).
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSink for DirSink {
    fn save(&mut self, bytes: &[u8], suggested_filename: &str, _mime_type: &str) -> Result<()> {
        fs::write(self.dir.join(suggested_filename), bytes)?;
        Ok(())
    }
}

/// Encodes the result sequence as a pretty-printed JSON array.
///
/// 2-space indentation; key order follows the `Record` field order and
/// the document round-trips exactly to the in-memory sequence.
pub fn to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Encodes the result sequence as CSV.
///
/// The header matches the JSON keys; rows follow sequence order 1:1.
/// The content column is always double-quoted with internal quotes
/// doubled, since post text routinely contains commas and newlines;
/// numeric columns are emitted bare.
#[must_use]
pub fn to_csv(records: &[Record]) -> String {
    let with_engagement = records.first().is_some_and(|r| r.engagement.is_some());

    let mut out = String::new();
    if with_engagement {
        out.push_str("index,content,reactions,comments,reposts,impressions\n");
    } else {
        out.push_str("index,content\n");
    }

    for record in records {
        out.push_str(&record.index.to_string());
        out.push(',');
        out.push_str(&escape_csv(&record.content));
        if let Some(e) = record.engagement {
            out.push_str(&format!(
                ",{},{},{},{}",
                e.reactions, e.comments, e.reposts, e.impressions
            ));
        }
        out.push('\n');
    }
    out
}

/// Wraps a field in double quotes, doubling internal quotes.
fn escape_csv(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len() + 2);
    escaped.push('"');
    for ch in field.chars() {
        if ch == '"' {
            escaped.push('"');
        }
        escaped.push(ch);
    }
    escaped.push('"');
    escaped
}

/// Serializes the result sequence to both formats and delivers them
/// through the sink, reporting completion.
///
/// The run producing `records` has already succeeded by the time this
/// is called; a sink failure surfaces here without invalidating the
/// in-memory result.
pub fn export(
    records: &[Record],
    sink: &mut dyn FileSink,
    progress: &dyn ProgressSink,
    options: &Options,
) -> Result<()> {
    let json = to_json(records)?;
    sink.save(json.as_bytes(), &options.json_filename, JSON_MIME)?;

    let csv = to_csv(records);
    sink.save(csv.as_bytes(), &options.csv_filename, CSV_MIME)?;

    info!(count = records.len(), "exported result sequence");
    progress.report(
        &format!("{} posts exported. Files saved.", records.len()),
        Severity::Success,
    );
    Ok(())
}
