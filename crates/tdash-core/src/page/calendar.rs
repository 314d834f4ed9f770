//! Month calendar with per-day events and the new-event modal.

use chrono::{Datelike, Duration, Months, NaiveDate};
use tracing::debug;

use crate::context::AppContext;
use crate::derive::{self, SortDirection};
use crate::error::DashResult;
use crate::forms::{self, NewEventForm};
use crate::model::Event;
use crate::record::RecordId;
use crate::store::Store;
use crate::view_state::{ModalId, ViewState};

pub const FILTERS: &[&str] = &["meeting", "task", "reminder", "deadline", "other"];

/// One day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Belongs to the displayed month rather than a neighbouring one.
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub event_count: usize,
}

#[derive(Debug, Clone)]
pub struct CalendarPage {
    pub store: Store<Event>,
    pub view: ViewState,
    selected: NaiveDate,
    month: NaiveDate,
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

impl CalendarPage {
    /// Open the calendar on `today`'s month with `today` selected.
    pub fn new(store: Store<Event>, today: NaiveDate) -> Self {
        Self {
            store,
            view: ViewState::new(FILTERS, ""),
            selected: today,
            month: first_of_month(today),
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Select a day; the grid follows to that day's month.
    pub fn select_date(&mut self, date: NaiveDate) {
        debug!(%date, "Date selected");
        self.selected = date;
        self.month = first_of_month(date);
    }

    /// Show the month containing `date` without changing the selection.
    pub fn show_month(&mut self, date: NaiveDate) {
        self.month = first_of_month(date);
    }

    pub fn next_month(&mut self) {
        self.month = self.month.checked_add_months(Months::new(1)).unwrap_or(self.month);
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.checked_sub_months(Months::new(1)).unwrap_or(self.month);
    }

    fn filtered(&self) -> Vec<&Event> {
        derive::filter_by_tag(self.store.records(), self.view.active_filter())
    }

    /// Weeks of the displayed month, Sunday first, padded with the
    /// neighbouring months' days to whole weeks.
    pub fn month_grid(&self, ctx: &AppContext) -> Vec<Vec<CalendarCell>> {
        let events = self.filtered();
        let by_day = ctx.timezone.group_by_date(events, |e| e.starts_at);
        let today = ctx.today();

        let next_month = self.month.checked_add_months(Months::new(1)).unwrap_or(self.month);
        let last = next_month.pred_opt().unwrap_or(self.month);
        let lead = self.month.weekday().num_days_from_sunday();
        let start = self.month - Duration::days(i64::from(lead));
        let end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));

        let cells: Vec<CalendarCell> = start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|date| CalendarCell {
                date,
                in_month: date.month() == self.month.month() && date.year() == self.month.year(),
                is_today: date == today,
                is_selected: date == self.selected,
                event_count: by_day.get(&date).map_or(0, Vec::len),
            })
            .collect();
        cells.chunks(7).map(<[CalendarCell]>::to_vec).collect()
    }

    /// Events on `date`, earliest first. A day without events is empty.
    pub fn events_on(&self, date: NaiveDate, ctx: &AppContext) -> Vec<&Event> {
        let events = ctx.timezone.on_date(self.filtered(), |e| e.starts_at, date);
        derive::sort_by(events, |e| e.starts_at, SortDirection::Ascending)
    }

    pub fn selected_events(&self, ctx: &AppContext) -> Vec<&Event> {
        self.events_on(self.selected, ctx)
    }

    /// Events starting at or after now, earliest first.
    pub fn upcoming(&self, ctx: &AppContext, limit: usize) -> Vec<&Event> {
        let now = ctx.now();
        let future = self.filtered().into_iter().filter(|e| e.starts_at >= now);
        let mut sorted = derive::sort_by(future, |e| e.starts_at, SortDirection::Ascending);
        sorted.truncate(limit);
        sorted
    }

    pub fn open_new_event(&mut self) {
        self.view.open_modal(ModalId::NewEvent, None);
    }

    pub fn submit_new_event(
        &mut self,
        form: NewEventForm,
        ctx: &AppContext,
    ) -> DashResult<RecordId> {
        let event = form.into_event(self.store.next_id()?, ctx.timezone)?;
        forms::submit(&mut self.store, &mut self.view, ModalId::NewEvent, event)
    }
}
