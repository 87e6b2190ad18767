//! # feedrake
//!
//! Incremental reveal-and-extract harvester for virtualized,
//! infinite-scrolling content feeds.
//!
//! The host environment exposes the feed through the [`FeedSource`]
//! trait; feedrake repeatedly scrolls it, waits for content to render,
//! extracts structured post records from each snapshot, deduplicates
//! them across overlapping passes, and serializes the accumulated
//! result to JSON and CSV. Termination is inferred from repeated
//! non-growth of the result, bounded by a hard iteration cap.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use feedrake::{harvest_with_options, FeedSource, NullProgress, Options};
//!
//! // A fully revealed page; real sources wrap a live view.
//! struct StaticPage(&'static str);
//!
//! impl FeedSource for StaticPage {
//!     fn scroll_extent(&mut self) -> u64 { 0 }
//!     fn scroll_to(&mut self, _offset: u64) {}
//!     fn snapshot(&mut self) -> String { self.0.to_string() }
//! }
//!
//! let mut page = StaticPage(
//!     r#"<div class="feed-item"><div class="feed-item__content">Hello world</div></div>"#,
//! );
//! let options = Options {
//!     per_step_delay: Duration::ZERO,
//!     stable_limit: 2,
//!     ..Options::default()
//! };
//! let report = harvest_with_options(&mut page, &NullProgress, &options);
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.records[0].content, "Hello world");
//! ```
//!
//! ## Scope
//!
//! The crate owns the reveal loop, field parsing, deduplication, and
//! the two export encodings. Page gating, UI affordances, progress
//! transport, and the actual file save are the host's concern, reached
//! only through the [`FeedSource`], [`ProgressSink`], and [`FileSink`]
//! traits.

mod error;
mod options;
mod record;

/// Compiled regex patterns for counter text and hashtag detection.
pub mod patterns;

/// Pure field parsing: content cleaning and counter extraction.
pub mod parse;

/// Per-snapshot record extraction.
pub mod extract;

/// Cross-pass deduplication.
pub mod dedup;

/// Host-environment feed contract.
pub mod source;

/// The reveal-loop state machine.
pub mod scroll;

/// One-way progress reporting.
pub mod progress;

/// JSON/CSV serialization and file delivery.
pub mod export;

// Public API - re-exports
pub use dedup::Deduplicator;
pub use error::{Error, Result};
pub use export::{DirSink, FileSink};
pub use options::Options;
pub use progress::{LogProgress, NullProgress, ProgressSink, Severity};
pub use record::{Engagement, Record, RunReport};
pub use scroll::{Phase, ScrollController};
pub use source::FeedSource;

/// Runs the reveal loop against `source` with default options and no
/// progress listener.
///
/// The run always succeeds: exhaustion and the iteration cap both
/// terminate into a [`RunReport`] carrying whatever was accumulated.
pub fn harvest<S: FeedSource>(source: &mut S) -> RunReport {
    harvest_with_options(source, &NullProgress, &Options::default())
}

/// Runs the reveal loop against `source` with custom options,
/// reporting progress through `progress`.
pub fn harvest_with_options<S: FeedSource>(
    source: &mut S,
    progress: &dyn ProgressSink,
    options: &Options,
) -> RunReport {
    progress.report("Starting scroll and extraction...", Severity::Info);
    ScrollController::new(options).run(source, progress)
}

/// Runs the reveal loop and exports the result sequence as JSON and
/// CSV through `sink`.
///
/// The reveal loop itself cannot fail; an error here means the export
/// encoding or the file sink failed after a successful run.
pub fn harvest_and_export<S: FeedSource>(
    source: &mut S,
    sink: &mut dyn FileSink,
    progress: &dyn ProgressSink,
    options: &Options,
) -> Result<RunReport> {
    let report = harvest_with_options(source, progress, options);
    export::export(&report.records, sink, progress, options)?;
    Ok(report)
}
