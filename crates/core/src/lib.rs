//! Domain types and pure logic for the photography project tracker.
//!
//! Nothing in this crate touches storage or HTTP; the store and API crates
//! build on it.

pub mod budget;
pub mod calendar;
pub mod enums;
pub mod error;
pub mod input;
pub mod templates;
pub mod timeline;
pub mod types;
