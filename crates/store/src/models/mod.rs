//! Record models and their request DTOs.
//!
//! Create DTOs carry `#[derive(Validate)]` rules that the HTTP boundary
//! enforces; the store accepts any well-typed payload. Update DTOs omit
//! `id`, `project_id` and `created_at`, so those keys are dropped during
//! deserialization and can never be rewritten.

pub mod budget_item;
pub mod calendar_event;
pub mod contact;
pub mod project;
pub mod task;

use shutterdesk_core::budget::MAX_AMOUNT;
use validator::ValidationError;

/// Reject strings that are empty after trimming.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Money fields are whole currency units in `0..=MAX_AMOUNT`.
pub(crate) fn valid_amount(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new("negative").with_message("must not be negative".into()));
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::new("too_large")
            .with_message(format!("must not exceed {MAX_AMOUNT}").into()));
    }
    Ok(())
}

/// Replace `target` with the patch value when one was supplied.
pub(crate) fn merge<T: Clone>(target: &mut T, patch: &Option<T>) {
    if let Some(value) = patch {
        *target = value.clone();
    }
}
