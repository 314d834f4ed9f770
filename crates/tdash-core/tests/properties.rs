//! Algebraic properties of the derivations.

use std::borrow::Cow;

use chrono::{Duration, TimeZone, Utc};

use tdash_core::derive::{self, SortDirection};
use tdash_core::record::{Filterable, Searchable};
use tdash_core::seed;

#[derive(Debug, PartialEq)]
struct Row {
    id: u64,
    p: &'static str,
}

impl Filterable for Row {
    fn category(&self) -> &str {
        self.p
    }
}

impl Searchable for Row {
    const SEARCH_FIELDS: &'static [&'static str] = &["p"];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (name == "p").then(|| Cow::Borrowed(self.p))
    }
}

fn rows() -> Vec<Row> {
    vec![
        Row { id: 1, p: "a" },
        Row { id: 2, p: "b" },
        Row { id: 3, p: "a" },
        Row { id: 3, p: "a" },
        Row { id: 4, p: "c" },
    ]
}

#[test]
fn all_filter_is_identity() {
    let rows = rows();
    let all = derive::filter_by_tag(&rows, "all");
    assert_eq!(all, rows.iter().collect::<Vec<_>>());

    let empty: Vec<Row> = Vec::new();
    assert!(derive::filter_by_tag(&empty, "all").is_empty());
}

#[test]
fn filter_is_idempotent() {
    let tasks = seed::tasks(Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap());
    for tag in ["todo", "in_progress", "completed", "overdue", "nonsense"] {
        let once = derive::filter_by_tag(&tasks, tag);
        let twice = derive::filter_by_tag(once.iter().copied(), tag);
        assert_eq!(once, twice, "tag {tag}");
    }
}

#[test]
fn search_never_grows() {
    let tasks = seed::tasks(Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap());
    for text in ["", "a", "design", "zzz", "E"] {
        assert!(derive::search_text(&tasks, text, &[]).len() <= tasks.len());
    }
    assert_eq!(derive::search_text(&tasks, "", &[]).len(), tasks.len());
}

#[test]
fn time_ago_boundaries() {
    let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let ago = |secs| derive::time_ago(now - Duration::seconds(secs), now);
    assert_eq!(ago(30), "Just now");
    assert_eq!(ago(90), "1m ago");
    assert_eq!(ago(3600), "1h ago");
    assert_eq!(ago(90_000), "1d ago");
}

#[test]
fn sort_keeps_ties_in_order() {
    let rows = vec![Row { id: 1, p: "a" }, Row { id: 2, p: "a" }];
    let asc: Vec<_> = derive::sort_by(&rows, |r| r.p, SortDirection::Ascending)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(asc, vec![1, 2]);

    let desc: Vec<_> = derive::sort_by(&rows, |r| r.p, SortDirection::Descending)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(desc, vec![1, 2]);
}
