pub mod budget_item;
pub mod calendar_event;
pub mod contact;
pub mod dashboard;
pub mod project;
pub mod task;
pub mod timeline;
