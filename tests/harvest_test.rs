//! End-to-end runs against scripted feeds.

use std::cell::RefCell;
use std::time::Duration;

use feedrake::{
    harvest_with_options, FeedSource, NullProgress, Options, ProgressSink, Severity,
};

/// Feed that reveals a scripted batch of posts per scroll request and
/// re-renders everything revealed so far, like a virtualized view with
/// overlapping windows.
struct ScriptedFeed {
    batches: Vec<Vec<String>>,
    revealed: usize,
}

impl ScriptedFeed {
    fn new(batches: Vec<Vec<&str>>) -> Self {
        Self {
            batches: batches
                .into_iter()
                .map(|batch| batch.into_iter().map(str::to_owned).collect())
                .collect(),
            revealed: 0,
        }
    }

    fn item_html(content: &str) -> String {
        format!(
            r#"<div class="feed-item">
                 <div class="feed-item__content">{content}</div>
                 <span class="feed-item__reactions">Jane Doe and 40 others</span>
                 <span class="feed-item__comments">12 comments</span>
                 <span class="feed-item__reposts">3 reposts</span>
                 <span class="feed-item__impressions">1,234 impressions</span>
               </div>"#
        )
    }
}

impl FeedSource for ScriptedFeed {
    fn scroll_extent(&mut self) -> u64 {
        (self.revealed as u64 + 1) * 4096
    }

    fn scroll_to(&mut self, _offset: u64) {
        if self.revealed < self.batches.len() {
            self.revealed += 1;
        }
    }

    fn snapshot(&mut self) -> String {
        let items: String = self.batches[..self.revealed]
            .iter()
            .flatten()
            .map(|content| Self::item_html(content))
            .collect();
        format!("<html><body><main>{items}</main></body></html>")
    }
}

fn fast_options() -> Options {
    Options {
        per_step_delay: Duration::ZERO,
        stable_limit: 3,
        ..Options::default()
    }
}

#[test]
fn accumulates_unique_posts_across_overlapping_passes() {
    let mut feed = ScriptedFeed::new(vec![
        vec!["First post", "Second post"],
        vec!["Third post"],
        // The host re-renders an earlier post at a new position.
        vec!["Second post", "Fourth post"],
    ]);
    let report = harvest_with_options(&mut feed, &NullProgress, &fast_options());

    let contents: Vec<&str> = report.records.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["First post", "Second post", "Third post", "Fourth post"]
    );
    let indices: Vec<usize> = report.records.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);
    assert!(report.exhausted);
}

#[test]
fn engagement_counters_survive_the_full_run() {
    let mut feed = ScriptedFeed::new(vec![vec!["Only post"]]);
    let report = harvest_with_options(&mut feed, &NullProgress, &fast_options());

    assert_eq!(report.records.len(), 1);
    let engagement = report.records[0].engagement.expect("engagement captured");
    assert_eq!(engagement.reactions, 40);
    assert_eq!(engagement.comments, 12);
    assert_eq!(engagement.reposts, 3);
    assert_eq!(engagement.impressions, 1234);
}

#[test]
fn termination_bound_is_growth_plus_stable_limit() {
    let batches: Vec<Vec<&str>> = vec![
        vec!["p1"],
        vec!["p2"],
        vec!["p3"],
        vec!["p4"],
        vec!["p5"],
    ];
    let options = Options {
        stable_limit: 10,
        ..fast_options()
    };
    let mut feed = ScriptedFeed::new(batches);
    let report = harvest_with_options(&mut feed, &NullProgress, &options);

    assert_eq!(report.iterations, 15, "5 growth passes + 10 stable passes");
    assert_eq!(report.records.len(), 5);
    assert!(report.exhausted);
}

#[test]
fn progress_checkpoints_fire_in_order() {
    #[derive(Default)]
    struct Collecting {
        messages: RefCell<Vec<(String, Severity)>>,
    }
    impl ProgressSink for Collecting {
        fn report(&self, text: &str, severity: Severity) {
            self.messages.borrow_mut().push((text.to_owned(), severity));
        }
    }

    let sink = Collecting::default();
    let mut feed = ScriptedFeed::new(vec![vec!["A post"]]);
    let report = harvest_with_options(&mut feed, &sink, &fast_options());

    let messages = sink.messages.into_inner();
    // Run start, scrolling banner, one per pass, extraction-complete.
    assert_eq!(messages[0].1, Severity::Info);
    assert!(messages[0].0.contains("Starting"));
    assert_eq!(messages[1].1, Severity::Scrolling);
    let per_pass = messages
        .iter()
        .filter(|(text, _)| text.starts_with("Pass "))
        .count();
    assert_eq!(per_pass, report.iterations as usize);
    let last = messages.last().expect("at least one message");
    assert!(last.0.contains("Finished scrolling"));
    assert!(last.0.contains("1 posts"));
}

#[test]
fn items_missing_content_container_contribute_nothing() {
    struct BrokenFeed {
        scrolled: bool,
    }
    impl FeedSource for BrokenFeed {
        fn scroll_extent(&mut self) -> u64 {
            4096
        }
        fn scroll_to(&mut self, _offset: u64) {
            self.scrolled = true;
        }
        fn snapshot(&mut self) -> String {
            r#"<html><body>
                 <div class="feed-item"><div class="feed-item__media">no text</div></div>
                 <div class="feed-item"><div class="feed-item__content">Real post</div></div>
               </body></html>"#
                .to_string()
        }
    }

    let mut feed = BrokenFeed { scrolled: false };
    let report = harvest_with_options(&mut feed, &NullProgress, &fast_options());
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].content, "Real post");
    assert_eq!(report.records[0].index, 1);
}

#[test]
fn empty_feed_terminates_with_empty_report() {
    struct EmptyFeed;
    impl FeedSource for EmptyFeed {
        fn scroll_extent(&mut self) -> u64 {
            0
        }
        fn scroll_to(&mut self, _offset: u64) {}
        fn snapshot(&mut self) -> String {
            "<html><body></body></html>".to_string()
        }
    }

    let options = Options {
        stable_limit: 2,
        ..fast_options()
    };
    let report = harvest_with_options(&mut EmptyFeed, &NullProgress, &options);
    assert!(report.records.is_empty());
    assert_eq!(report.iterations, 2);
    assert!(report.exhausted);
}
