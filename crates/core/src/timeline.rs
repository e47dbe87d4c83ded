//! Timeline items and day/week/month windows over them.
//!
//! Items come from three sources (calendar events, task deadlines, project
//! shoot dates). They are bucketed by local calendar day in the order they
//! are pushed, and each day is then stably sorted by `start_date`, so equal
//! timestamps keep source order. No cross-source de-duplication happens.

use std::collections::BTreeMap;

use chrono::{Datelike, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::calendar::{self, CalendarView, DateRange};
use crate::enums::EventType;
use crate::types::{DbId, Timestamp};

/// Which record a timeline item was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineSource {
    CalendarEvent,
    TaskDeadline,
    ProjectShoot,
}

/// A displayable calendar entry normalised from one source record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineItem {
    /// Id of the source record.
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub source: TimelineSource,
    pub title: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub project_id: DbId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayWindow {
    pub date: NaiveDate,
    pub items: Vec<TimelineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<DayWindow>,
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthDay {
    #[serde(flatten)]
    pub day: DayWindow,
    /// False for leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<MonthDay>,
}

/// Items grouped by local calendar day.
#[derive(Debug, Clone)]
pub struct TimelineBuckets {
    offset: FixedOffset,
    range: DateRange,
    days: BTreeMap<NaiveDate, Vec<TimelineItem>>,
}

impl TimelineBuckets {
    /// Buckets that silently drop items outside `range`.
    pub fn for_range(offset: FixedOffset, range: DateRange) -> Self {
        Self {
            offset,
            range,
            days: BTreeMap::new(),
        }
    }

    /// Buckets sized for `view` around `date`.
    pub fn for_view(offset: FixedOffset, view: CalendarView, date: NaiveDate) -> Self {
        Self::for_range(offset, calendar::range_for(view, date))
    }

    /// Add an item to the bucket for its local start day.
    pub fn push(&mut self, item: TimelineItem) {
        let date = calendar::local_date(item.start_date, self.offset);
        if !self.range.contains(date) {
            return;
        }
        self.days.entry(date).or_default().push(item);
    }

    /// All items on `date`, ascending by start time.
    pub fn day(&self, date: NaiveDate) -> DayWindow {
        let mut items = self.days.get(&date).cloned().unwrap_or_default();
        items.sort_by_key(|item| item.start_date);
        DayWindow { date, items }
    }

    /// Sunday-to-Saturday week containing `date`.
    pub fn week(&self, date: NaiveDate) -> WeekWindow {
        let range = calendar::week_range(date);
        WeekWindow {
            start: range.start,
            end: range.end,
            days: range.days().map(|day| self.day(day)).collect(),
        }
    }

    /// Whole-week grid for the month containing `date`.
    pub fn month(&self, date: NaiveDate) -> MonthWindow {
        let bounds = calendar::month_bounds(date);
        let grid = calendar::month_grid(date);
        MonthWindow {
            year: date.year(),
            month: date.month(),
            start: grid.start,
            end: grid.end,
            days: grid
                .days()
                .map(|day| MonthDay {
                    day: self.day(day),
                    in_month: bounds.contains(day),
                })
                .collect(),
        }
    }
}

impl Extend<TimelineItem> for TimelineBuckets {
    fn extend<I: IntoIterator<Item = TimelineItem>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::TimelineSource::{CalendarEvent, ProjectShoot, TaskDeadline};
    use super::*;
    use crate::enums::EventType::{Deadline, Meeting, Photoshoot};
    use crate::types::new_id;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    /// Buckets covering June 2025 with a week of slack either side.
    fn june(offset: FixedOffset) -> TimelineBuckets {
        TimelineBuckets::for_range(
            offset,
            DateRange {
                start: d(2025, 5, 25),
                end: d(2025, 7, 12),
            },
        )
    }

    fn item(
        title: &str,
        kind: EventType,
        source: TimelineSource,
        start: Timestamp,
    ) -> TimelineItem {
        TimelineItem {
            id: new_id(),
            kind,
            source,
            title: title.to_string(),
            start_date: start,
            end_date: None,
            description: None,
            location: None,
            project_id: new_id(),
        }
    }

    fn at(day: u32, hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2025, 6, day, hour, 0, 0).unwrap()
    }

    fn titles(window: DayWindow) -> Vec<String> {
        window.items.into_iter().map(|i| i.title).collect()
    }

    #[test]
    fn day_is_sorted_by_start_time() {
        let mut buckets = june(utc());
        buckets.push(item("Meeting", Meeting, CalendarEvent, at(1, 8)));
        buckets.push(item("Cull", Deadline, TaskDeadline, at(1, 23)));
        buckets.push(item("Shoot", Photoshoot, ProjectShoot, at(1, 10)));

        assert_eq!(titles(buckets.day(d(2025, 6, 1))), ["Meeting", "Shoot", "Cull"]);
    }

    #[test]
    fn equal_timestamps_keep_push_order() {
        let mut buckets = june(utc());
        buckets.push(item("event", Photoshoot, CalendarEvent, at(2, 9)));
        buckets.push(item("task", Deadline, TaskDeadline, at(2, 9)));
        buckets.push(item("shoot", Photoshoot, ProjectShoot, at(2, 9)));

        assert_eq!(titles(buckets.day(d(2025, 6, 2))), ["event", "task", "shoot"]);
    }

    #[test]
    fn offset_moves_items_across_midnight() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let mut buckets = june(plus_two);
        buckets.push(item("late", Meeting, CalendarEvent, at(1, 23)));

        assert!(buckets.day(d(2025, 6, 1)).items.is_empty());
        assert_eq!(buckets.day(d(2025, 6, 2)).items.len(), 1);
    }

    #[test]
    fn range_filter_drops_outside_items() {
        let mut buckets = TimelineBuckets::for_view(utc(), CalendarView::Week, d(2025, 6, 4));
        buckets.push(item("in", Meeting, CalendarEvent, at(7, 12)));
        buckets.push(item("out", Meeting, CalendarEvent, at(8, 12)));

        assert_eq!(titles(buckets.day(d(2025, 6, 7))), ["in"]);
        assert!(buckets.day(d(2025, 6, 8)).items.is_empty());
    }

    #[test]
    fn week_has_seven_days() {
        let mut buckets = june(utc());
        buckets.push(item("a", Meeting, CalendarEvent, at(3, 12)));

        let week = buckets.week(d(2025, 6, 4));
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.start, d(2025, 6, 1));
        assert_eq!(week.days[2].items.len(), 1);
    }

    #[test]
    fn month_marks_adjacent_days() {
        let month = june(utc()).month(d(2025, 6, 15));

        assert_eq!(month.days.len() % 7, 0);
        assert!(month.days.first().is_some_and(|cell| cell.in_month));
        assert!(month.days.last().is_some_and(|cell| !cell.in_month));
        assert_eq!(month.days.iter().filter(|cell| cell.in_month).count(), 30);
    }

    #[test]
    fn item_serialises_kind_as_type() {
        let json = serde_json::to_value(item("x", Deadline, TaskDeadline, at(1, 1))).unwrap();
        assert_eq!(json["type"], "deadline");
        assert_eq!(json["source"], "task_deadline");
    }
}
