//! The reveal loop: scroll, wait, extract, deduplicate, repeat.
//!
//! Termination is exhaustion-based, not completion-based: the
//! controller cannot know the feed has ended except by observing
//! repeated non-growth of the result sequence. A hard iteration cap
//! bounds runaway feeds independently.

use std::thread;

use dom_query::Document;
use tracing::{debug, info};

use crate::dedup::Deduplicator;
use crate::extract::extract_records;
use crate::options::Options;
use crate::progress::{ProgressSink, Severity};
use crate::record::RunReport;
use crate::source::FeedSource;

/// Phase of the reveal loop.
///
/// `Idle → Scrolling → Settling → Done`. The loop moves between
/// `Scrolling` and `Settling` as passes do or do not grow the result
/// sequence; `Settling` becomes `Done` once the stability window fills
/// (or the iteration cap fires).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No run in progress yet.
    Idle,
    /// Recent passes are still yielding new records.
    Scrolling,
    /// Draining: one or more consecutive passes accepted nothing.
    Settling,
    /// The run has terminated.
    Done,
}

/// Drives the reveal loop against a host feed until exhaustion or the
/// iteration cap, reporting progress along the way.
///
/// Both termination causes are the same success path: the report
/// carries whatever was accumulated. One controller serves one run;
/// its deduplicator state is not reused.
pub struct ScrollController<'a> {
    options: &'a Options,
    phase: Phase,
    position: u64,
}

impl<'a> ScrollController<'a> {
    /// Creates an idle controller for one run.
    #[must_use]
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            phase: Phase::Idle,
            position: 0,
        }
    }

    /// Current phase of the run.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs the reveal loop to completion.
    ///
    /// Each pass advances the view by `scroll_step` (clamped to the
    /// extent the source reports), pauses for `per_step_delay` so the
    /// host can render, extracts candidates from a fresh snapshot, and
    /// feeds them through the deduplicator. A pass that accepts nothing
    /// counts toward the stability window; any accepted record resets
    /// it.
    pub fn run<S: FeedSource>(&mut self, source: &mut S, progress: &dyn ProgressSink) -> RunReport {
        let opts = self.options;
        let mut dedup = Deduplicator::new();
        let mut records = Vec::new();
        let mut stable = 0u32;
        let mut iteration = 0u32;

        progress.report("Scrolling through the feed...", Severity::Scrolling);
        self.phase = Phase::Scrolling;

        while stable < opts.stable_limit && iteration < opts.max_iterations {
            let extent = source.scroll_extent();
            self.position = self.position.saturating_add(opts.scroll_step).min(extent);
            source.scroll_to(self.position);

            // Heuristic render wait, not a completion signal.
            if !opts.per_step_delay.is_zero() {
                thread::sleep(opts.per_step_delay);
            }

            let doc = Document::from(source.snapshot());
            let mut accepted = 0usize;
            for mut candidate in extract_records(&doc, opts) {
                if dedup.accept(&candidate.content) {
                    candidate.index = records.len() + 1;
                    records.push(candidate);
                    accepted += 1;
                }
            }

            if accepted == 0 {
                stable += 1;
                self.phase = Phase::Settling;
            } else {
                stable = 0;
                self.phase = Phase::Scrolling;
            }

            iteration += 1;
            debug!(pass = iteration, accepted, stable, total = records.len(), "reveal pass");
            progress.report(
                &format!("Pass {iteration}: {} unique posts so far...", records.len()),
                Severity::Scrolling,
            );
        }

        self.phase = Phase::Done;
        let exhausted = stable >= opts.stable_limit;
        info!(
            iterations = iteration,
            total = records.len(),
            exhausted,
            "reveal loop finished"
        );
        progress.report(
            &format!(
                "Finished scrolling. Extracted {} posts over {iteration} passes.",
                records.len()
            ),
            Severity::Info,
        );

        RunReport {
            records,
            iterations: iteration,
            exhausted,
        }
    }
}
