//! Calendar windowing and navigation.
//!
//! Weeks run Sunday through Saturday regardless of locale. A month window
//! is a grid of whole weeks, so it may start in the previous month and end
//! in the next one. Navigation is a pure transform on a reference date.
//!
//! Date arithmetic saturates at chrono's representable limits, so no input
//! can panic here. Callers taking dates from clients should still reject
//! anything outside [`SUPPORTED_YEARS`] via [`check_supported`].

use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, FixedOffset, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

pub const DAYS_PER_WEEK: i64 = 7;

/// Years a client may address.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Granularity of a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    Day,
    Week,
    Month,
}

/// Navigation action applied to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    Previous,
    Next,
    /// Jump to the current date in the calendar's time reference.
    Today,
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Number of days in the range, counting both ends.
    pub fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day in the range, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.len())
    }
}

/// Reject dates outside [`SUPPORTED_YEARS`].
pub fn check_supported(date: NaiveDate) -> Result<NaiveDate, CoreError> {
    if SUPPORTED_YEARS.contains(&date.year()) {
        Ok(date)
    } else {
        Err(CoreError::Validation(format!(
            "Date {date} is outside the supported years {}-{}",
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end(),
        )))
    }
}

/// `date` moved by `days`, clamped to the representable range.
fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    shift_days(date, -i64::from(date.weekday().num_days_from_sunday()))
}

/// The Sunday-to-Saturday week containing `date`.
pub fn week_range(date: NaiveDate) -> DateRange {
    let start = week_start(date);
    DateRange {
        start,
        end: shift_days(start, DAYS_PER_WEEK - 1),
    }
}

/// First and last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> DateRange {
    let first = shift_days(date, -i64::from(date.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .map(|next| shift_days(next, -1))
        .unwrap_or(NaiveDate::MAX);
    DateRange {
        start: first,
        end: last,
    }
}

/// Whole-week grid covering the month containing `date`.
pub fn month_grid(date: NaiveDate) -> DateRange {
    let month = month_bounds(date);
    DateRange {
        start: week_range(month.start).start,
        end: week_range(month.end).end,
    }
}

/// Days covered by `view` around `date`.
pub fn range_for(view: CalendarView, date: NaiveDate) -> DateRange {
    match view {
        CalendarView::Day => DateRange::single(date),
        CalendarView::Week => week_range(date),
        CalendarView::Month => month_grid(date),
    }
}

/// Calendar date of `ts` in the given time reference.
pub fn local_date(ts: Timestamp, offset: FixedOffset) -> NaiveDate {
    ts.with_timezone(&offset).date_naive()
}

/// Move one `view` unit forward or backward from `date`.
///
/// Month steps clamp to the end of the target month (Jan 31 -> Feb 28).
pub fn step(view: CalendarView, date: NaiveDate, forward: bool) -> NaiveDate {
    match (view, forward) {
        (CalendarView::Day, true) => shift_days(date, 1),
        (CalendarView::Day, false) => shift_days(date, -1),
        (CalendarView::Week, true) => shift_days(date, DAYS_PER_WEEK),
        (CalendarView::Week, false) => shift_days(date, -DAYS_PER_WEEK),
        (CalendarView::Month, true) => date.checked_add_months(Months::new(1)).unwrap_or(date),
        (CalendarView::Month, false) => date.checked_sub_months(Months::new(1)).unwrap_or(date),
    }
}

/// Apply a navigation action. `now` is only consulted for [`Navigation::Today`].
pub fn navigate(
    view: CalendarView,
    date: NaiveDate,
    action: Navigation,
    offset: FixedOffset,
    now: Timestamp,
) -> NaiveDate {
    match action {
        Navigation::Previous => step(view, date, false),
        Navigation::Next => step(view, date, true),
        Navigation::Today => local_date(now, offset),
    }
}
