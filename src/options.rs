//! Configuration options for the reveal-and-extract run.

use std::time::Duration;

/// Configuration for a harvest run.
///
/// All fields are public for easy configuration. Use
/// `Default::default()` for standard settings.
///
/// # Example
///
/// ```rust
/// use feedrake::Options;
///
/// let options = Options {
///     capture_engagement: false,
///     stable_limit: 5,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Distance (in host scroll units) the view is advanced per pass.
    ///
    /// The controller clamps the target offset to the extent the source
    /// reports, so oversized steps simply jump to the end of the feed.
    ///
    /// Default: `2048`
    pub scroll_step: u64,

    /// Pause after each scroll request, giving the host time to render
    /// newly revealed content. A heuristic wait, not a completion
    /// signal.
    ///
    /// Default: `800ms`
    pub per_step_delay: Duration,

    /// Consecutive passes without newly accepted records before the
    /// feed is declared exhausted. A single stale pass never terminates
    /// the run; transient render lag is expected.
    ///
    /// Default: `10`
    pub stable_limit: u32,

    /// Hard cap on reveal-loop passes; runaway guard independent of the
    /// stability heuristic, always wins when reached first.
    ///
    /// Default: `500`
    pub max_iterations: u32,

    /// Capture engagement counters (reactions, comments, reposts,
    /// impressions) in addition to content.
    ///
    /// Default: `true`
    pub capture_engagement: bool,

    /// Selector for top-level feed-item containers, matched in document
    /// order.
    ///
    /// Default: `".feed-item"`
    pub item_selector: String,

    /// Selector for the item's body-text container, scoped to the item.
    /// Items without a match are skipped entirely.
    ///
    /// Default: `".feed-item__content"`
    pub content_selector: String,

    /// Selector for the reactions summary element.
    ///
    /// Default: `".feed-item__reactions"`
    pub reactions_selector: String,

    /// Selector for the comment-count element.
    ///
    /// Default: `".feed-item__comments"`
    pub comments_selector: String,

    /// Selector for the repost-count element.
    ///
    /// Default: `".feed-item__reposts"`
    pub reposts_selector: String,

    /// Selector for the impression-count element. The first match wins
    /// when the host renders several.
    ///
    /// Default: `".feed-item__impressions"`
    pub impressions_selector: String,

    /// Suggested filename for the JSON export.
    ///
    /// Default: `"feed_posts.json"`
    pub json_filename: String,

    /// Suggested filename for the CSV export.
    ///
    /// Default: `"feed_posts.csv"`
    pub csv_filename: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            scroll_step: 2048,
            per_step_delay: Duration::from_millis(800),
            stable_limit: 10,
            max_iterations: 500,
            capture_engagement: true,
            item_selector: ".feed-item".into(),
            content_selector: ".feed-item__content".into(),
            reactions_selector: ".feed-item__reactions".into(),
            comments_selector: ".feed-item__comments".into(),
            reposts_selector: ".feed-item__reposts".into(),
            impressions_selector: ".feed-item__impressions".into(),
            json_filename: "feed_posts.json".into(),
            csv_filename: "feed_posts.csv".into(),
        }
    }
}
