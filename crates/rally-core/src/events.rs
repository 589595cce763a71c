//! Event CRUD with soft-delete semantics.
//!
//! Name uniqueness is enforced among active events only, and only as far as a
//! scan at check time can observe; two concurrent creates with the same name
//! can both pass. Soft delete (`active = false`) is terminal for events, in
//! contrast to registrations where cancellation is re-enterable.
use crate::config::CoreConfig;
use crate::errors::{CoreError, CoreResult};
use crate::model::{new_record_id, Event, EventPatch, NewEvent};
use crate::query::{self, EventFilter, Page, PageRequest};
use crate::store::RegistryStore;
use chrono::Utc;
use std::sync::Arc;

pub struct EventService {
    store: Arc<dyn RegistryStore>,
    config: CoreConfig,
}

impl EventService {
    pub fn new(store: Arc<dyn RegistryStore>, config: CoreConfig) -> Self {
        Self { store, config }
    }

    /// Publish a new event owned by `input.organizer_id`.
    ///
    /// # Errors
    /// - `Validation` when the name is blank; carries a well-formed request
    ///   sample for the caller.
    /// - `Conflict` when another active event already uses the name.
    pub async fn create(&self, input: NewEvent) -> CoreResult<Event> {
        if input.name.trim().is_empty() {
            return Err(CoreError::validation_with_example(
                "event name must not be blank",
                serde_json::json!({
                    "name": "RustConf",
                    "date": "2031-06-01T09:00:00Z",
                    "organizer_id": "u-organizer"
                }),
            ));
        }

        let name = input.name.clone();
        let same_name = self
            .store
            .scan_events(&move |event: &Event| event.active && event.name == name)
            .await?;
        if !same_name.is_empty() {
            return Err(CoreError::Conflict(format!(
                "an active event named {:?} already exists",
                input.name
            )));
        }

        let now = Utc::now();
        let event = Event {
            event_id: new_record_id(),
            name: input.name,
            date: input.date,
            organizer_id: input.organizer_id,
            active: true,
            created_at: now,
            updated_at: now,
        };
        let event = self.store.put_event(event).await?;
        tracing::info!(event_id = %event.event_id, organizer_id = %event.organizer_id, "event created");
        Ok(event)
    }

    pub async fn get(&self, event_id: &str) -> CoreResult<Event> {
        self.store
            .get_event(event_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("event {event_id}")))
    }

    /// Apply a partial update. Inactive events are frozen; soft delete has no
    /// mutation path back.
    pub async fn update(&self, event_id: &str, patch: EventPatch) -> CoreResult<Event> {
        let mut event = self.get(event_id).await?;
        if !event.active {
            return Err(CoreError::validation(format!(
                "event {event_id} is no longer active"
            )));
        }

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(CoreError::validation("event name must not be blank"));
            }
            if name != event.name {
                let candidate = name.clone();
                let target = event.event_id.clone();
                let same_name = self
                    .store
                    .scan_events(&move |other: &Event| {
                        other.active && other.name == candidate && other.event_id != target
                    })
                    .await?;
                if !same_name.is_empty() {
                    return Err(CoreError::Conflict(format!(
                        "an active event named {name:?} already exists"
                    )));
                }
            }
            event.name = name;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        event.updated_at = Utc::now();
        Ok(self.store.put_event(event).await?)
    }

    /// Soft-delete an event. Re-deactivating an already-inactive event
    /// proceeds and rewrites the flag, same stance as registration
    /// double-cancel; nothing ever flips `active` back to `true`.
    pub async fn deactivate(&self, event_id: &str) -> CoreResult<Event> {
        let mut event = self.get(event_id).await?;
        event.active = false;
        event.updated_at = Utc::now();
        let event = self.store.put_event(event).await?;
        tracing::info!(event_id, "event deactivated");
        Ok(event)
    }

    pub async fn list(&self, filter: &EventFilter, request: PageRequest) -> CoreResult<Page<Event>> {
        let request = request.with_defaults(self.config.default_page_limit);
        query::list_events(self.store.as_ref(), filter, request).await
    }
}
