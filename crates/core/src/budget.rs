//! Budget arithmetic over a project's cost lines.
//!
//! Pure and stateless: recomputed on every read. All money is whole
//! currency units, so only the margin percentage is ever fractional.

use serde::Serialize;

/// Largest amount accepted for any single money field.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Planned and actual cost of one budget line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CostEntry {
    pub planned: i64,
    pub actual: i64,
}

/// Budget figures shown on the project detail view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub budget: i64,
    pub total_planned: i64,
    pub total_actual: i64,
    /// `budget - total_actual`. Compares the ceiling against money actually
    /// spent, not against the plan.
    pub profit_loss: i64,
    /// `profit_loss / budget * 100`, or `None` when no budget is set.
    pub margin_percent: Option<f64>,
}

impl BudgetSummary {
    /// Summarise `entries` against the project's top-line `budget`.
    pub fn compute<I>(budget: i64, entries: I) -> Self
    where
        I: IntoIterator<Item = CostEntry>,
    {
        let (total_planned, total_actual) = entries
            .into_iter()
            .fold((0i64, 0i64), |(planned, actual), e| {
                (planned.saturating_add(e.planned), actual.saturating_add(e.actual))
            });

        let profit_loss = budget.saturating_sub(total_actual);

        Self {
            budget,
            total_planned,
            total_actual,
            profit_loss,
            margin_percent: margin_percent(profit_loss, budget),
        }
    }

    /// True when the project has overspent its budget.
    pub fn is_over_budget(&self) -> bool {
        self.profit_loss < 0
    }
}

/// Margin as a percentage of `budget`. Undefined for a zero budget.
pub fn margin_percent(profit_loss: i64, budget: i64) -> Option<f64> {
    if budget == 0 {
        None
    } else {
        Some(profit_loss as f64 * 100.0 / budget as f64)
    }
}
