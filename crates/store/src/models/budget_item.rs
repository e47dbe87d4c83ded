//! Budget line model and DTOs.

use serde::{Deserialize, Serialize};
use shutterdesk_core::budget::CostEntry;
use shutterdesk_core::enums::PaymentStatus;
use shutterdesk_core::input::deserialize_nullable;
use shutterdesk_core::types::{DbId, Timestamp};
use validator::Validate;

use super::{merge, not_blank, valid_amount};
use crate::listener::EntityKind;
use crate::store::Tables;
use crate::table::{Entity, Owned, Table};

/// One expense line in a project's budget. Costs are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetItem {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub planned_cost: i64,
    pub actual_cost: i64,
    pub payment_status: PaymentStatus,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateBudgetItem {
    #[serde(default)]
    pub project_id: DbId,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "valid_amount"))]
    pub planned_cost: i64,
    #[serde(default)]
    #[validate(custom(function = "valid_amount"))]
    pub actual_cost: i64,
    /// Defaults to `unpaid`.
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBudgetItem {
    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,
    #[validate(custom(function = "valid_amount"))]
    pub planned_cost: Option<i64>,
    #[validate(custom(function = "valid_amount"))]
    pub actual_cost: Option<i64>,
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub category: Option<Option<String>>,
}

impl BudgetItem {
    pub fn cost_entry(&self) -> CostEntry {
        CostEntry {
            planned: self.planned_cost,
            actual: self.actual_cost,
        }
    }
}

impl Entity for BudgetItem {
    const KIND: EntityKind = EntityKind::BudgetItem;
    type Create = CreateBudgetItem;
    type Update = UpdateBudgetItem;

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Option<DbId> {
        Some(self.project_id)
    }

    fn build(id: DbId, _now: Timestamp, input: &CreateBudgetItem) -> Self {
        Self {
            id,
            project_id: input.project_id,
            description: input.description.clone(),
            planned_cost: input.planned_cost,
            actual_cost: input.actual_cost,
            payment_status: input.payment_status,
            category: input.category.clone(),
        }
    }

    fn apply(&mut self, input: &UpdateBudgetItem, _now: Timestamp) {
        merge(&mut self.description, &input.description);
        merge(&mut self.planned_cost, &input.planned_cost);
        merge(&mut self.actual_cost, &input.actual_cost);
        merge(&mut self.payment_status, &input.payment_status);
        merge(&mut self.category, &input.category);
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.budget_items
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.budget_items
    }
}

impl Owned for BudgetItem {
    fn project_id(&self) -> DbId {
        self.project_id
    }
}

#[cfg(test)]
mod tests {
    use shutterdesk_core::budget::MAX_AMOUNT;

    use super::*;

    #[test]
    fn costs_default_to_zero_and_unpaid() {
        let input: CreateBudgetItem =
            serde_json::from_str(r#"{"description": "Second shooter"}"#).unwrap();
        assert_eq!(input.planned_cost, 0);
        assert_eq!(input.actual_cost, 0);
        assert_eq!(input.payment_status, PaymentStatus::Unpaid);
    }

    #[test]
    fn negative_costs_fail_validation() {
        let patch = UpdateBudgetItem {
            actual_cost: Some(-10),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn costs_above_the_ceiling_fail_validation() {
        let input = CreateBudgetItem {
            description: "Drone rental".to_string(),
            actual_cost: i64::MAX,
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("actual_cost"));

        let input = CreateBudgetItem {
            actual_cost: MAX_AMOUNT,
            ..input
        };
        assert!(input.validate().is_ok());
    }
}
