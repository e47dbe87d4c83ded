//! The process-wide record store.
//!
//! All five tables sit behind a single `RwLock`. Reads share the lock;
//! every mutation, and every multi-table cascade, holds the write guard for
//! its whole duration and never awaits while holding it. Concurrent readers
//! therefore never see a half-applied cascade.

use std::sync::Arc;

use chrono::Utc;
use shutterdesk_core::types::{new_id, DbId};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::listener::{ChangeAction, EntityKind, StoreChange, StoreListener};
use crate::models::budget_item::BudgetItem;
use crate::models::calendar_event::CalendarEvent;
use crate::models::contact::Contact;
use crate::models::project::Project;
use crate::models::task::Task;
use crate::table::{Entity, Owned, Table};

/// One table per record kind.
#[derive(Debug, Default)]
pub struct Tables {
    pub(crate) projects: Table<Project>,
    pub(crate) tasks: Table<Task>,
    pub(crate) contacts: Table<Contact>,
    pub(crate) budget_items: Table<BudgetItem>,
    pub(crate) calendar_events: Table<CalendarEvent>,
}

struct StoreInner {
    tables: RwLock<Tables>,
    listeners: Vec<Arc<dyn StoreListener>>,
}

/// Shared handle to the in-memory store.
///
/// Cheaply cloneable; all clones see the same data. The store lives for the
/// lifetime of the process and starts empty.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with no listeners.
    pub fn new() -> Self {
        Self::with_listeners(Vec::new())
    }

    /// Create an empty store that reports every mutation to `listeners`.
    pub fn with_listeners(listeners: Vec<Arc<dyn StoreListener>>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                tables: RwLock::new(Tables::default()),
                listeners,
            }),
        }
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.inner.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.tables.write().await
    }

    /// Report a change to every listener. Call while holding the write guard.
    pub(crate) fn notify(
        &self,
        kind: EntityKind,
        action: ChangeAction,
        id: DbId,
        project_id: Option<DbId>,
    ) {
        if self.inner.listeners.is_empty() {
            return;
        }
        let change = StoreChange {
            kind,
            action,
            id,
            project_id,
        };
        for listener in &self.inner.listeners {
            listener.on_change(&change);
        }
    }

    // -----------------------------------------------------------------------
    // Generic operations shared by the repositories
    // -----------------------------------------------------------------------

    /// Insert a record built from `input` under the held write guard.
    pub(crate) fn insert_locked<E: Entity>(&self, tables: &mut Tables, input: &E::Create) -> E {
        let record = E::build(new_id(), Utc::now(), input);
        E::table_mut(tables).insert(record.clone());
        self.notify(E::KIND, ChangeAction::Created, record.id(), record.owner());
        record
    }

    pub(crate) async fn insert<E: Entity>(&self, input: &E::Create) -> E {
        let mut tables = self.write().await;
        self.insert_locked(&mut tables, input)
    }

    pub(crate) async fn get<E: Entity>(&self, id: DbId) -> Option<E> {
        let tables = self.read().await;
        E::table(&tables).get(id).cloned()
    }

    pub(crate) async fn list<E: Entity>(&self) -> Vec<E> {
        let tables = self.read().await;
        E::table(&tables).iter().cloned().collect()
    }

    pub(crate) async fn list_by_project<E: Owned>(&self, project_id: DbId) -> Vec<E> {
        let tables = self.read().await;
        E::table(&tables)
            .iter_by_project(project_id)
            .cloned()
            .collect()
    }

    pub(crate) async fn update<E: Entity>(&self, id: DbId, input: &E::Update) -> Option<E> {
        let mut tables = self.write().await;
        let record = E::table_mut(&mut tables).get_mut(id)?;
        record.apply(input, Utc::now());
        let updated = record.clone();
        self.notify(E::KIND, ChangeAction::Updated, id, updated.owner());
        Some(updated)
    }

    /// Like [`Store::update`], but `check` must accept the stored record and
    /// the patch before it is applied. Check and write share one guard.
    pub(crate) async fn update_checked<E, Err>(
        &self,
        id: DbId,
        input: &E::Update,
        check: impl FnOnce(&E, &E::Update) -> Result<(), Err>,
    ) -> Result<Option<E>, Err>
    where
        E: Entity,
    {
        let mut tables = self.write().await;
        let Some(record) = E::table_mut(&mut tables).get_mut(id) else {
            return Ok(None);
        };
        check(record, input)?;
        record.apply(input, Utc::now());
        let updated = record.clone();
        self.notify(E::KIND, ChangeAction::Updated, id, updated.owner());
        Ok(Some(updated))
    }

    /// Remove a dependent record. Projects go through the cascade instead.
    pub(crate) async fn delete<E: Owned>(&self, id: DbId) -> bool {
        let mut tables = self.write().await;
        match E::table_mut(&mut tables).remove(id) {
            Some(removed) => {
                self.notify(E::KIND, ChangeAction::Deleted, id, Some(removed.project_id()));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::models::contact::CreateContact;
    use crate::models::project::CreateProject;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<StoreChange>>);

    impl StoreListener for Recorder {
        fn on_change(&self, change: &StoreChange) {
            self.0.lock().unwrap().push(*change);
        }
    }

    fn contact(project_id: DbId, name: &str) -> CreateContact {
        CreateContact {
            project_id,
            name: name.to_string(),
            role: "Planner".to_string(),
            email: None,
            phone: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = Store::new();
        let project_id = new_id();

        let first: Contact = store.insert(&contact(project_id, "A")).await;
        assert!(store.delete::<Contact>(first.id).await);
        let second: Contact = store.insert(&contact(project_id, "B")).await;

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order_across_deletes() {
        let store = Store::new();
        let project_id = new_id();

        let a: Contact = store.insert(&contact(project_id, "A")).await;
        let _b: Contact = store.insert(&contact(project_id, "B")).await;
        let _c: Contact = store.insert(&contact(project_id, "C")).await;
        store.delete::<Contact>(a.id).await;
        let _d: Contact = store.insert(&contact(project_id, "D")).await;

        let names: Vec<String> = store
            .list::<Contact>()
            .await
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["B", "C", "D"]);
    }

    #[tokio::test]
    async fn listeners_see_every_mutation() {
        let recorder = Arc::new(Recorder::default());
        let store = Store::with_listeners(vec![recorder.clone()]);

        let project: Project = store
            .insert(&CreateProject {
                name: "Shoot".to_string(),
                ..Default::default()
            })
            .await;
        let c: Contact = store.insert(&contact(project.id, "A")).await;
        store.delete::<Contact>(c.id).await;
        store.delete::<Contact>(c.id).await;

        let changes = recorder.0.lock().unwrap().clone();
        let actions: Vec<(EntityKind, ChangeAction)> =
            changes.iter().map(|c| (c.kind, c.action)).collect();
        assert_eq!(
            actions,
            [
                (EntityKind::Project, ChangeAction::Created),
                (EntityKind::Contact, ChangeAction::Created),
                (EntityKind::Contact, ChangeAction::Deleted),
            ]
        );
        assert_eq!(changes[1].project_id, Some(project.id));
    }
}
