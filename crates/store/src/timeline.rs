//! Timeline aggregation across calendar events, task deadlines and project
//! shoot dates.

use chrono::{FixedOffset, NaiveDate};
use shutterdesk_core::calendar::CalendarView;
use shutterdesk_core::enums::EventType;
use shutterdesk_core::timeline::{
    DayWindow, MonthWindow, TimelineBuckets, TimelineItem, TimelineSource, WeekWindow,
};

use crate::models::calendar_event::CalendarEvent;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::store::{Store, Tables};
use crate::table::Entity;

impl From<&CalendarEvent> for TimelineItem {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            id: event.id,
            kind: event.event_type,
            source: TimelineSource::CalendarEvent,
            title: event.title.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            description: event.description.clone(),
            location: event.location.clone(),
            project_id: event.project_id,
        }
    }
}

/// A task's due date as a deadline item. `None` for undated tasks.
fn task_deadline(task: &Task) -> Option<TimelineItem> {
    let due = task.due_date?;
    Some(TimelineItem {
        id: task.id,
        kind: EventType::Deadline,
        source: TimelineSource::TaskDeadline,
        title: task.title.clone(),
        start_date: due,
        end_date: None,
        description: None,
        location: None,
        project_id: task.project_id,
    })
}

/// A project's shoot date as a photoshoot item. `None` when unscheduled.
fn project_shoot(project: &Project) -> Option<TimelineItem> {
    let shoot = project.shoot_date?;
    Some(TimelineItem {
        id: project.id,
        kind: EventType::Photoshoot,
        source: TimelineSource::ProjectShoot,
        title: project.name.clone(),
        start_date: shoot,
        end_date: None,
        description: None,
        location: None,
        project_id: project.id,
    })
}

/// Push every timeline candidate in source order: events, then deadlines
/// (whatever the task status), then shoots.
fn collect(tables: &Tables, buckets: &mut TimelineBuckets) {
    buckets.extend(CalendarEvent::table(tables).iter().map(TimelineItem::from));
    buckets.extend(Task::table(tables).iter().filter_map(task_deadline));
    buckets.extend(Project::table(tables).iter().filter_map(project_shoot));
}

/// Read-only aggregator over the whole store.
pub struct TimelineRepo;

impl TimelineRepo {
    /// Bucket every item in the `view` window around `date` under one read guard.
    pub async fn buckets(
        store: &Store,
        offset: FixedOffset,
        view: CalendarView,
        date: NaiveDate,
    ) -> TimelineBuckets {
        let tables = store.read().await;
        let mut buckets = TimelineBuckets::for_view(offset, view, date);
        collect(&tables, &mut buckets);
        buckets
    }

    pub async fn day(store: &Store, offset: FixedOffset, date: NaiveDate) -> DayWindow {
        Self::buckets(store, offset, CalendarView::Day, date)
            .await
            .day(date)
    }

    pub async fn week(store: &Store, offset: FixedOffset, date: NaiveDate) -> WeekWindow {
        Self::buckets(store, offset, CalendarView::Week, date)
            .await
            .week(date)
    }

    pub async fn month(store: &Store, offset: FixedOffset, date: NaiveDate) -> MonthWindow {
        Self::buckets(store, offset, CalendarView::Month, date)
            .await
            .month(date)
    }
}
