//! Application context: the few cross-view settings (theme, sidebar,
//! timezone policy, clock) passed by reference to the views that need them.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DashConfig;
use crate::derive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Timezone in which instants are turned into calendar dates.
///
/// One policy governs every date comparison: grouping events by day,
/// picking events for a selected day, and the "today" highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimezonePolicy {
    #[default]
    Local,
    Utc,
}

impl TimezonePolicy {
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => derive::calendar_date(instant, &Local),
            Self::Utc => derive::calendar_date(instant, &Utc),
        }
    }

    /// Instant of a wall-clock date and time in this timezone. `None` when
    /// the local time is skipped or repeated by a DST transition.
    pub fn instant_at(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
        let naive = date.and_time(time);
        match self {
            Self::Local => Local
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
            Self::Utc => Some(naive.and_utc()),
        }
    }

    /// Wall-clock label such as `10:30 AM`.
    pub fn clock_label(&self, instant: DateTime<Utc>) -> String {
        const FORMAT: &str = "%I:%M %p";
        match self {
            Self::Local => instant.with_timezone(&Local).format(FORMAT).to_string(),
            Self::Utc => instant.format(FORMAT).to_string(),
        }
    }

    pub fn is_same_day(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.date_of(a) == self.date_of(b)
    }

    pub fn group_by_date<'a, T: 'a>(
        &self,
        records: impl IntoIterator<Item = &'a T>,
        date_of: impl Fn(&T) -> DateTime<Utc>,
    ) -> BTreeMap<NaiveDate, Vec<&'a T>> {
        match self {
            Self::Local => derive::group_by_date(records, date_of, &Local),
            Self::Utc => derive::group_by_date(records, date_of, &Utc),
        }
    }

    pub fn on_date<'a, T: 'a>(
        &self,
        records: impl IntoIterator<Item = &'a T>,
        date_of: impl Fn(&T) -> DateTime<Utc>,
        date: NaiveDate,
    ) -> Vec<&'a T> {
        match self {
            Self::Local => derive::on_date(records, date_of, date, &Local),
            Self::Utc => derive::on_date(records, date_of, date, &Utc),
        }
    }
}

/// Cross-view state owned by the application root.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub timezone: TimezonePolicy,
    pub pinned_now: Option<DateTime<Utc>>,
}

impl AppContext {
    pub fn from_config(config: &DashConfig) -> Self {
        Self {
            theme: config.theme,
            sidebar_collapsed: config.sidebar_collapsed,
            timezone: config.timezone,
            pinned_now: config.now,
        }
    }

    /// Pin the clock, for reproducible rendering.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.pinned_now = Some(now);
        self
    }

    /// Current instant: the pinned one if set, else the wall clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.pinned_now.unwrap_or_else(Utc::now)
    }

    pub fn today(&self) -> NaiveDate {
        self.timezone.date_of(self.now())
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.as_str(), "Theme toggled");
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        debug!(collapsed = self.sidebar_collapsed, "Sidebar toggled");
    }
}
