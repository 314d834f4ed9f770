//! Derivation Engine: pure functions from a store snapshot and view state
//! to the ordered records a view displays.
//!
//! Every function here is total: empty input gives empty output, unknown
//! tags and fields match nothing, and nothing reads the wall clock. Views
//! are returned as borrowed records so derivations compose without
//! copying.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::record::{Filterable, Searchable};
use crate::view_state::ALL_FILTER;

/// Keep records matching `tag`, preserving order.
///
/// [`ALL_FILTER`] keeps everything. A tag naming a boolean field (see
/// [`Filterable::flag`]) keeps records where that field is `true`; any
/// other tag is compared against [`Filterable::category`].
pub fn filter_by_tag<'a, T, I>(records: I, tag: &str) -> Vec<&'a T>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if tag == ALL_FILTER {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|r| match r.flag(tag) {
            Some(set) => set,
            None => r.category() == tag,
        })
        .collect()
}

/// Case-insensitive substring search over the named fields.
///
/// The named fields are joined with a newline and searched as one string.
/// Adjacent fields never fuse into one word, but a needle that itself
/// contains a newline can match across the join. An empty `fields` slice searches
/// [`Searchable::SEARCH_FIELDS`]; unknown field names contribute nothing.
/// An empty `text` keeps everything.
pub fn search_text<'a, T, I>(records: I, text: &str, fields: &[&str]) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if text.is_empty() {
        return records.into_iter().collect();
    }
    let needle = text.to_lowercase();
    let fields = if fields.is_empty() { T::SEARCH_FIELDS } else { fields };

    records
        .into_iter()
        .filter(|r| {
            let haystack = fields
                .iter()
                .filter_map(|name| r.field(name))
                .collect::<Vec<_>>()
                .join("\n")
                .to_lowercase();
            haystack.contains(&needle)
        })
        .collect()
}

/// Calendar date of `instant` in `tz`.
pub fn calendar_date<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

/// Group records by the calendar date of `date_of` in `tz`. Buckets are
/// keyed by date (rendered as `YYYY-MM-DD`) and keep input order.
pub fn group_by_date<'a, T, I, Tz>(
    records: I,
    date_of: impl Fn(&T) -> DateTime<Utc>,
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<&'a T>>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    Tz: TimeZone,
{
    let mut groups: BTreeMap<NaiveDate, Vec<&'a T>> = BTreeMap::new();
    for record in records {
        groups
            .entry(calendar_date(date_of(record), tz))
            .or_default()
            .push(record);
    }
    groups
}

/// Records falling on `date` in `tz`. A date without records gives an
/// empty sequence.
pub fn on_date<'a, T, I, Tz>(
    records: I,
    date_of: impl Fn(&T) -> DateTime<Utc>,
    date: NaiveDate,
    tz: &Tz,
) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    Tz: TimeZone,
{
    records
        .into_iter()
        .filter(|r| calendar_date(date_of(*r), tz) == date)
        .collect()
}

/// Relative label for `timestamp` as seen at `now`.
///
/// Uses the largest whole unit: under a minute (or in the future) is
/// `"Just now"`, then `"{n}m ago"`, `"{n}h ago"`, `"{n}d ago"`. Unit
/// boundaries are inclusive, so exactly 60 minutes is `"1h ago"`.
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days}d ago")
    } else if hours > 0 {
        format!("{hours}h ago")
    } else if minutes > 0 {
        format!("{minutes}m ago")
    } else {
        "Just now".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Stable sort by `key`. Ties keep their input order in both directions.
pub fn sort_by<'a, T, I, K>(
    records: I,
    key: impl Fn(&T) -> K,
    direction: SortDirection,
) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Ord,
{
    let mut sorted: Vec<&'a T> = records.into_iter().collect();
    sorted.sort_by(|a, b| {
        let ordering: Ordering = key(*a).cmp(&key(*b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Number of records per category bucket.
pub fn count_by_bucket<'a, T, I>(records: I) -> BTreeMap<&'a str, usize>
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.category()).or_insert(0) += 1;
    }
    counts
}

/// Number of records matching `tag` (e.g. the unread badge).
pub fn count_matching<'a, T, I>(records: I, tag: &str) -> usize
where
    T: Filterable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    filter_by_tag(records, tag).len()
}

/// Whole-number percentage of `part` in `total`; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part.min(total) * 100) / total) as u8
}
