//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&Store` as the first argument.

pub mod budget_item_repo;
pub mod calendar_event_repo;
pub mod contact_repo;
pub mod project_repo;
pub mod task_repo;

pub use budget_item_repo::BudgetItemRepo;
pub use calendar_event_repo::CalendarEventRepo;
pub use contact_repo::ContactRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
