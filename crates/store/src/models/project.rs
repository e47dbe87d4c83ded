//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use shutterdesk_core::enums::{ProjectStatus, ProjectType};
use shutterdesk_core::input::{
    deserialize_nullable, deserialize_nullable_timestamp, deserialize_optional_timestamp,
};
use shutterdesk_core::types::{DbId, Timestamp};
use validator::Validate;

use super::{merge, not_blank, valid_amount};
use crate::listener::EntityKind;
use crate::store::Tables;
use crate::table::{Entity, Table};

/// A photography project: the root every other record hangs off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,
    pub status: ProjectStatus,
    pub client_name: Option<String>,
    pub shoot_date: Option<Timestamp>,
    /// Top-line budget in whole currency units.
    pub budget: i64,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    /// Selects the task template. `None` and `blank` seed nothing.
    #[serde(rename = "type", default)]
    pub project_type: Option<ProjectType>,
    /// Defaults to `planning` if omitted.
    #[serde(default)]
    pub status: ProjectStatus,
    pub client_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub shoot_date: Option<Timestamp>,
    #[serde(default)]
    #[validate(custom(function = "valid_amount"))]
    pub budget: i64,
    pub description: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; nullable
/// fields distinguish "omitted" from an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "deserialize_nullable")]
    pub project_type: Option<Option<ProjectType>>,
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub client_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable_timestamp")]
    pub shoot_date: Option<Option<Timestamp>>,
    #[validate(custom(function = "valid_amount"))]
    pub budget: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;
    type Create = CreateProject;
    type Update = UpdateProject;

    fn id(&self) -> DbId {
        self.id
    }

    fn owner(&self) -> Option<DbId> {
        None
    }

    fn build(id: DbId, now: Timestamp, input: &CreateProject) -> Self {
        Self {
            id,
            name: input.name.clone(),
            project_type: input.project_type,
            status: input.status,
            client_name: input.client_name.clone(),
            shoot_date: input.shoot_date,
            budget: input.budget,
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, input: &UpdateProject, now: Timestamp) {
        merge(&mut self.name, &input.name);
        merge(&mut self.project_type, &input.project_type);
        merge(&mut self.status, &input.status);
        merge(&mut self.client_name, &input.client_name);
        merge(&mut self.shoot_date, &input.shoot_date);
        merge(&mut self.budget, &input.budget);
        merge(&mut self.description, &input.description);
        self.updated_at = now;
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.projects
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.projects
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use shutterdesk_core::types::new_id;

    use super::*;

    fn project() -> Project {
        Project::build(
            new_id(),
            Utc::now(),
            &CreateProject {
                name: "Smith wedding".to_string(),
                project_type: Some(ProjectType::Wedding),
                client_name: Some("Jo Smith".to_string()),
                budget: 5000,
                ..Default::default()
            },
        )
    }

    #[test]
    fn create_payload_defaults() {
        let input: CreateProject = serde_json::from_str(r#"{"name": "Headshots"}"#).unwrap();
        assert_eq!(input.status, ProjectStatus::Planning);
        assert_eq!(input.budget, 0);
        assert_eq!(input.project_type, None);
    }

    #[test]
    fn type_field_is_named_type_on_the_wire() {
        let input: CreateProject =
            serde_json::from_str(r#"{"name": "Launch", "type": "commercial"}"#).unwrap();
        assert_eq!(input.project_type, Some(ProjectType::Commercial));

        let json = serde_json::to_value(project()).unwrap();
        assert_eq!(json["type"], "wedding");
    }

    #[test]
    fn apply_merges_only_supplied_fields() {
        let mut p = project();
        let created_at = p.created_at;
        let patch: UpdateProject =
            serde_json::from_str(r#"{"status": "editing", "client_name": null}"#).unwrap();

        p.apply(&patch, Utc::now());

        assert_eq!(p.status, ProjectStatus::Editing);
        assert_eq!(p.client_name, None);
        assert_eq!(p.name, "Smith wedding");
        assert_eq!(p.budget, 5000);
        assert_eq!(p.created_at, created_at);
    }

    #[test]
    fn status_can_move_backwards() {
        let mut p = project();
        for status in [ProjectStatus::Delivered, ProjectStatus::Planning] {
            p.apply(
                &UpdateProject {
                    status: Some(status),
                    ..Default::default()
                },
                Utc::now(),
            );
            assert_eq!(p.status, status);
        }
    }

    #[test]
    fn identity_fields_in_patch_are_ignored() {
        let mut p = project();
        let id = p.id;
        let patch: UpdateProject = serde_json::from_str(
            r#"{
                "id": "00000000-0000-0000-0000-000000000000",
                "created_at": "2000-01-01",
                "name": "Renamed"
            }"#,
        )
        .unwrap();

        p.apply(&patch, Utc::now());

        assert_eq!(p.id, id);
        assert_eq!(p.name, "Renamed");
    }

    #[test]
    fn validation_rejects_blank_name_and_negative_budget() {
        let input = CreateProject {
            name: "   ".to_string(),
            budget: -1,
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("budget"));
    }
}
