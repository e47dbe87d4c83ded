//! Contact entity model and DTOs.

use serde::{Deserialize, Serialize};
use shutterdesk_core::input::deserialize_nullable;
use shutterdesk_core::types::{DbId, Timestamp};
use validator::Validate;

use super::{merge, not_blank};
use crate::listener::EntityKind;
use crate::store::Tables;
use crate::table::{Entity, Owned, Table};

/// A person involved in a project (client, planner, second shooter...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    /// Free text, e.g. "Bride", "Venue coordinator".
    pub role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateContact {
    #[serde(default)]
    pub project_id: DbId,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub role: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContact {
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub notes: Option<Option<String>>,
}

impl Entity for Contact {
    const KIND: EntityKind = EntityKind::Contact;
    type Create = CreateContact;
    type Update = UpdateContact;

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Option<DbId> {
        Some(self.project_id)
    }

    fn build(id: DbId, _now: Timestamp, input: &CreateContact) -> Self {
        Self {
            id,
            project_id: input.project_id,
            name: input.name.clone(),
            role: input.role.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            notes: input.notes.clone(),
        }
    }

    fn apply(&mut self, input: &UpdateContact, _now: Timestamp) {
        merge(&mut self.name, &input.name);
        merge(&mut self.role, &input.role);
        merge(&mut self.email, &input.email);
        merge(&mut self.phone, &input.phone);
        merge(&mut self.notes, &input.notes);
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.contacts
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.contacts
    }
}

impl Owned for Contact {
    fn project_id(&self) -> DbId {
        self.project_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_must_be_well_formed() {
        let input = CreateContact {
            name: "Alex".to_string(),
            role: "Planner".to_string(),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let input = CreateContact {
            email: Some("alex@example.com".to_string()),
            ..input
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn role_is_required() {
        let input = CreateContact {
            name: "Alex".to_string(),
            role: String::new(),
            ..Default::default()
        };
        assert!(input.validate().unwrap_err().field_errors().contains_key("role"));
    }
}
