//! Generic per-kind record table.
//!
//! Rows are kept in insertion order; removal is order-preserving so `list`
//! output never reshuffles. Lookup by id is O(1); filtering by owning
//! project is a linear scan.

use indexmap::IndexMap;
use shutterdesk_core::types::{DbId, Timestamp};

use crate::listener::EntityKind;
use crate::store::Tables;

/// A record kind the store can hold.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Creation payload (everything except id and timestamps).
    type Create;
    /// Partial update payload. Has no `id`, `project_id` or `created_at`.
    type Update;

    fn id(&self) -> DbId;

    /// Owning project, if the kind has one.
    fn owner(&self) -> Option<DbId>;

    /// Materialise a full record from its creation payload.
    fn build(id: DbId, now: Timestamp, input: &Self::Create) -> Self;

    /// Shallow-merge the supplied fields onto `self`.
    fn apply(&mut self, input: &Self::Update, now: Timestamp);

    fn table(tables: &Tables) -> &Table<Self>;
    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;
}

/// A record kind owned by a project.
pub trait Owned: Entity {
    fn project_id(&self) -> DbId;
}

#[derive(Debug, Clone)]
pub struct Table<E> {
    rows: IndexMap<DbId, E>,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: IndexMap::new(),
        }
    }
}

impl<E: Entity> Table<E> {
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn insert(&mut self, record: E) {
        self.rows.insert(record.id(), record);
    }

    pub fn get(&self, id: DbId) -> Option<&E> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: DbId) -> Option<&mut E> {
        self.rows.get_mut(&id)
    }

    /// Rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.rows.values()
    }

    /// Remove one row, keeping the order of the rest.
    pub fn remove(&mut self, id: DbId) -> Option<E> {
        self.rows.shift_remove(&id)
    }
}

impl<E: Owned> Table<E> {
    /// Rows owned by `project_id`, in insertion order.
    pub fn iter_by_project(&self, project_id: DbId) -> impl Iterator<Item = &E> {
        self.rows
            .values()
            .filter(move |row| row.project_id() == project_id)
    }

    /// Remove every row owned by `project_id`, returning the removed ids.
    pub fn remove_by_project(&mut self, project_id: DbId) -> Vec<DbId> {
        let mut removed = Vec::new();
        self.rows.retain(|id, row| {
            if row.project_id() == project_id {
                removed.push(*id);
                false
            } else {
                true
            }
        });
        removed
    }
}
