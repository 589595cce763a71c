//! Notification seam for registration state transitions.
//!
//! The core fires these after a successful transition and never rolls the
//! transition back on failure; a failed notification is logged by the caller
//! and swallowed. Email/calendar rendering lives behind this trait, outside
//! the core.
use crate::model::{Event, User};
use async_trait::async_trait;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn on_registration_created(&self, event: &Event, user: &User) -> anyhow::Result<()>;
    async fn on_registration_cancelled(&self, event: &Event, user: &User) -> anyhow::Result<()>;
}

/// Default collaborator for tests and headless deployments.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn on_registration_created(&self, event: &Event, user: &User) -> anyhow::Result<()> {
        tracing::debug!(event_id = %event.event_id, user_id = %user.user_id, "registration created");
        Ok(())
    }

    async fn on_registration_cancelled(&self, event: &Event, user: &User) -> anyhow::Result<()> {
        tracing::debug!(event_id = %event.event_id, user_id = %user.user_id, "registration cancelled");
        Ok(())
    }
}
