//! Store adapter contract for the registration core.
//!
//! # Purpose
//! Wraps a key-value store that offers exactly four primitives per table:
//! point-get by key, point-put, delete by key, and scan-with-predicate.
//! There is no secondary index and no snapshot isolation; a scan evaluates
//! its predicate in memory at call time and returns an unordered set, so two
//! scans issued moments apart may disagree even within one logical request.
//! Layers above are written to tolerate that.
//!
//! # Failure policy
//! Transport failures surface as [`StoreError::Unexpected`] and propagate
//! unmodified; this core performs no retries. Retries, if any, belong inside
//! an adapter implementation.
use crate::model::{Event, Registration, User};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

/// In-memory-evaluated scan filter.
pub type Predicate<'a, T> = dyn Fn(&T) -> bool + Send + Sync + 'a;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl StoreError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        StoreError::Unexpected(anyhow::anyhow!(message.into()))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Typed access to the three tables this core touches: Events,
/// Registrations, and Users (read-only from here).
///
/// `get` returns `None` for an absent key; domain-level not-found handling
/// belongs to the callers. `put` is an upsert and echoes the stored item.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn get_event(&self, event_id: &str) -> StoreResult<Option<Event>>;
    async fn put_event(&self, event: Event) -> StoreResult<Event>;
    async fn delete_event(&self, event_id: &str) -> StoreResult<()>;
    async fn scan_events(&self, predicate: &Predicate<'_, Event>) -> StoreResult<Vec<Event>>;

    async fn get_registration(&self, registration_id: &str) -> StoreResult<Option<Registration>>;
    async fn put_registration(&self, registration: Registration) -> StoreResult<Registration>;
    async fn delete_registration(&self, registration_id: &str) -> StoreResult<()>;
    async fn scan_registrations(
        &self,
        predicate: &Predicate<'_, Registration>,
    ) -> StoreResult<Vec<Registration>>;

    async fn get_user(&self, user_id: &str) -> StoreResult<Option<User>>;
    async fn scan_users(&self, predicate: &Predicate<'_, User>) -> StoreResult<Vec<User>>;

    /// Short backend label for log context.
    fn backend_name(&self) -> &'static str;
}
