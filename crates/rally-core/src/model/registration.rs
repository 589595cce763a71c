//! Registration model definitions.
use crate::model::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's enrollment in one event.
///
/// At most one registration per `(user_id, event_id)` pair may have
/// `active = true` at a time. Cancellation flips `active` to `false` and the
/// record is never physically deleted; re-registering creates a new record
/// rather than reviving the cancelled one.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Registration {
    pub registration_id: String,
    pub user_id: String,
    pub event_id: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A registration joined with its event for response shaping.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegistrationWithEvent {
    pub registration: Registration,
    pub event: Event,
}
