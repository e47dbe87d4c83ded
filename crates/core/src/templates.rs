//! Task templates seeded when a project is created.
//!
//! The catalog is static data: one ordered skeleton list per project type.
//! `Blank` and a missing type map to no tasks. Unknown type keys never
//! parse into a [`ProjectType`], so they cannot select a template.

use crate::enums::{ProjectType, TaskSection};
use crate::enums::TaskSection::{PostProduction as Post, PreProduction as Pre, ShootDay as Shoot};

/// One task skeleton: the title and section copied onto the seeded task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub section: TaskSection,
}

const fn t(section: TaskSection, title: &'static str) -> TaskTemplate {
    TaskTemplate { title, section }
}

const WEDDING: &[TaskTemplate] = &[
    t(Pre, "Initial client consultation"),
    t(Pre, "Sign contract and collect deposit"),
    t(Pre, "Engagement session"),
    t(Pre, "Scout ceremony and reception venues"),
    t(Pre, "Build shot list with the couple"),
    t(Pre, "Confirm day-of timeline"),
    t(Shoot, "Getting ready coverage"),
    t(Shoot, "Ceremony coverage"),
    t(Shoot, "Family formals"),
    t(Shoot, "Reception coverage"),
    t(Post, "Cull and back up images"),
    t(Post, "Edit and retouch gallery"),
    t(Post, "Deliver online gallery"),
];

const PORTRAIT: &[TaskTemplate] = &[
    t(Pre, "Discuss session goals"),
    t(Pre, "Choose location and wardrobe"),
    t(Shoot, "Portrait session"),
    t(Post, "Select proofs with client"),
    t(Post, "Retouch final images"),
    t(Post, "Deliver final images"),
];

const COMMERCIAL: &[TaskTemplate] = &[
    t(Pre, "Review creative brief"),
    t(Pre, "Send estimate and contract"),
    t(Pre, "Book crew and rentals"),
    t(Pre, "Pre-production call"),
    t(Shoot, "Studio or location shoot"),
    t(Shoot, "Client approval on set"),
    t(Post, "Post-production edits"),
    t(Post, "Licensing paperwork"),
    t(Post, "Deliver final assets"),
];

const EVENT: &[TaskTemplate] = &[
    t(Pre, "Confirm event schedule"),
    t(Pre, "Coordinate with organizer"),
    t(Shoot, "Event coverage"),
    t(Shoot, "Key moments and speakers"),
    t(Post, "Quick-turn highlights"),
    t(Post, "Full gallery delivery"),
];

/// Keyed template table. `Blank` is deliberately absent.
const CATALOG: &[(ProjectType, &[TaskTemplate])] = &[
    (ProjectType::Wedding, WEDDING),
    (ProjectType::Portrait, PORTRAIT),
    (ProjectType::Commercial, COMMERCIAL),
    (ProjectType::Event, EVENT),
];

/// Template for a project type, in seeding order. Empty for `Blank`.
pub fn for_type(project_type: ProjectType) -> &'static [TaskTemplate] {
    CATALOG
        .iter()
        .find(|(kind, _)| *kind == project_type)
        .map(|(_, tasks)| *tasks)
        .unwrap_or(&[])
}

/// Template for an optional project type (`None` behaves like `Blank`).
pub fn for_project(project_type: Option<ProjectType>) -> &'static [TaskTemplate] {
    project_type.map(for_type).unwrap_or(&[])
}
