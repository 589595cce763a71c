//! Event model definitions and mutation payloads.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event published by an organizer.
///
/// `active = false` is a soft delete and is terminal: no operation in this
/// core ever sets it back to `true`. Name uniqueness holds among active
/// events only, and only as far as a scan at check time can observe.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    pub event_id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub organizer_id: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an event. Id and timestamps are assigned on persist.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewEvent {
    pub name: String,
    pub date: DateTime<Utc>,
    pub organizer_id: String,
}

/// Partial update for an event; absent fields are left untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
}
