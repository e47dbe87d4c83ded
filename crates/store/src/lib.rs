//! In-memory record store for projects and their dependents.
//!
//! Records live for the lifetime of the process. Access goes through the
//! zero-sized repositories in [`repositories`]; multi-table writes go
//! through [`cascade`].

pub mod cascade;
pub mod dashboard;
pub mod listener;
pub mod models;
pub mod repositories;
pub mod store;
pub mod table;
pub mod timeline;

pub use listener::{ChangeAction, EntityKind, StoreChange, StoreListener};
pub use store::Store;
