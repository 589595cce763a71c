//! In-memory implementation of the registry store.
//!
//! # Purpose
//! Implements the `RegistryStore` trait entirely in memory using `HashMap`s
//! guarded by `tokio::sync::RwLock`. It exists for:
//! - local development and tests (no external dependencies)
//! - deployments where durability is not required
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Per-call consistency only**: each operation takes one lock for its
//!   duration, but nothing couples two operations. A scan followed by a put
//!   is exactly as racy as the scan-based store contract promises, which is
//!   what the lifecycle layer's duplicate check is written against.
//!
//! # Performance characteristics
//! - Reads are cheap and concurrent (many readers).
//! - Scans clone every matching record; acceptable for the data sizes this
//!   core targets, mirroring the backing store's full-scan contract.
use super::{Predicate, RegistryStore, StoreResult};
use crate::model::{Event, Registration, User};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory registry store.
///
/// All maps are wrapped in `Arc<RwLock<...>>` so the store can be cloned and
/// shared across async request handlers, reads can proceed concurrently, and
/// writes are serialized per table.
#[derive(Default)]
pub struct InMemoryStore {
    /// Events keyed by `event_id`.
    events: Arc<RwLock<HashMap<String, Event>>>,
    /// Registrations keyed by `registration_id`.
    registrations: Arc<RwLock<HashMap<String, Registration>>>,
    /// Users keyed by `user_id`; written only through [`InMemoryStore::put_user`].
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the read-only Users table. The identity collaborator owns user
    /// writes in production; tests and bootstrap call this directly.
    pub async fn put_user(&self, user: User) -> StoreResult<User> {
        self.users
            .write()
            .await
            .insert(user.user_id.clone(), user.clone());
        Ok(user)
    }
}

#[async_trait]
impl RegistryStore for InMemoryStore {
    async fn get_event(&self, event_id: &str) -> StoreResult<Option<Event>> {
        Ok(self.events.read().await.get(event_id).cloned())
    }

    async fn put_event(&self, event: Event) -> StoreResult<Event> {
        self.events
            .write()
            .await
            .insert(event.event_id.clone(), event.clone());
        Ok(event)
    }

    async fn delete_event(&self, event_id: &str) -> StoreResult<()> {
        self.events.write().await.remove(event_id);
        Ok(())
    }

    async fn scan_events(&self, predicate: &Predicate<'_, Event>) -> StoreResult<Vec<Event>> {
        // Full-table scan with client-side filtering; no ordering, no snapshot.
        Ok(self
            .events
            .read()
            .await
            .values()
            .filter(|event| predicate(event))
            .cloned()
            .collect())
    }

    async fn get_registration(&self, registration_id: &str) -> StoreResult<Option<Registration>> {
        Ok(self.registrations.read().await.get(registration_id).cloned())
    }

    async fn put_registration(&self, registration: Registration) -> StoreResult<Registration> {
        self.registrations
            .write()
            .await
            .insert(registration.registration_id.clone(), registration.clone());
        Ok(registration)
    }

    async fn delete_registration(&self, registration_id: &str) -> StoreResult<()> {
        self.registrations.write().await.remove(registration_id);
        Ok(())
    }

    async fn scan_registrations(
        &self,
        predicate: &Predicate<'_, Registration>,
    ) -> StoreResult<Vec<Registration>> {
        Ok(self
            .registrations
            .read()
            .await
            .values()
            .filter(|registration| predicate(registration))
            .cloned()
            .collect())
    }

    async fn get_user(&self, user_id: &str) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn scan_users(&self, predicate: &Predicate<'_, User>) -> StoreResult<Vec<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .filter(|user| predicate(user))
            .cloned()
            .collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
