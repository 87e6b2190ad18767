//! Host-environment contract for the scrolling feed.
//!
//! The core never touches the page, the UI, or any transport directly;
//! it drives the host through this narrow interface and assumes it is
//! only ever invoked on a valid target (gating is upstream).

/// A scrollable, queryable content view owned by the host environment.
///
/// Implementations wrap whatever actually renders the feed (a browser
/// tab, a headless driver, a scripted fixture in tests). Snapshots are
/// the rendered content tree as HTML text; the extractor parses them
/// with structural selectors, so partially rendered or placeholder
/// markup is acceptable and simply yields fewer candidates this pass.
pub trait FeedSource {
    /// Current scrollable extent of the view, in host units.
    fn scroll_extent(&mut self) -> u64;

    /// Requests the view scroll to the given offset. The request is
    /// advisory; rendering happens asynchronously on the host side.
    fn scroll_to(&mut self, offset: u64);

    /// Renders the currently revealed content tree as HTML text.
    fn snapshot(&mut self) -> String;
}
