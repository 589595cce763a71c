//! Registration-core data model module.
//!
//! # Purpose
//! Re-exports the event/registration/user records and mutation payloads used
//! by the services and store layers.
mod event;
mod registration;
mod user;

pub use event::{Event, EventPatch, NewEvent};
pub use registration::{Registration, RegistrationWithEvent};
pub use user::User;

/// Fresh opaque identifier for a newly persisted record.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
