//! Repository for the `contacts` table.

use shutterdesk_core::types::DbId;

use crate::models::contact::{Contact, CreateContact, UpdateContact};
use crate::store::Store;

/// Provides CRUD operations for project contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    pub async fn create(store: &Store, input: &CreateContact) -> Contact {
        let contact: Contact = store.insert(input).await;
        tracing::debug!(
            contact_id = %contact.id,
            project_id = %contact.project_id,
            "Contact created",
        );
        contact
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Contact> {
        store.get(id).await
    }

    pub async fn list(store: &Store) -> Vec<Contact> {
        store.list().await
    }

    pub async fn list_by_project(store: &Store, project_id: DbId) -> Vec<Contact> {
        store.list_by_project(project_id).await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(store: &Store, id: DbId, input: &UpdateContact) -> Option<Contact> {
        store.update(id, input).await
    }

    /// Delete a contact by ID. Returns `true` if a row was removed.
    pub async fn delete(store: &Store, id: DbId) -> bool {
        store.delete::<Contact>(id).await
    }
}
