//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;
use shutterdesk_core::calendar::{CalendarView, Navigation};

/// `?date=YYYY-MM-DD` for timeline windows. Omitted means today.
#[derive(Debug, Deserialize)]
pub struct DateParams {
    pub date: Option<NaiveDate>,
}

/// `?view=&date=&direction=` for timeline navigation.
#[derive(Debug, Deserialize)]
pub struct NavigateParams {
    pub view: CalendarView,
    pub date: Option<NaiveDate>,
    pub direction: Navigation,
}
