//! Registration lifecycle state machine.
//!
//! # Purpose
//! Enforces the registration invariants per `(user_id, event_id)` pair:
//! no duplicate active registration, no registration on inactive or
//! past-dated events. States are `none`, `active`, `cancelled`; cancelling is
//! re-enterable (a new record is created on re-registration, never a revival
//! of the cancelled one) while event soft-deletion is terminal.
//!
//! # Consistency caveat
//! The duplicate check is a scan followed by a put with nothing coupling the
//! two; two concurrent `register` calls for the same pair can both pass the
//! check before either writes. The store contract offers no conditional-put
//! primitive, so the race stands as a documented limitation of this core.
use crate::config::CoreConfig;
use crate::errors::{CoreError, CoreResult};
use crate::model::{new_record_id, Event, Registration, RegistrationWithEvent, User};
use crate::notify::Notifier;
use crate::query::{self, Page, PageRequest, RegistrationFilter};
use crate::store::RegistryStore;
use chrono::Utc;
use std::sync::Arc;

pub struct RegistrationService {
    store: Arc<dyn RegistryStore>,
    notifier: Arc<dyn Notifier>,
    config: CoreConfig,
}

impl RegistrationService {
    pub fn new(
        store: Arc<dyn RegistryStore>,
        notifier: Arc<dyn Notifier>,
        config: CoreConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Register `user_id` for `event_id`.
    ///
    /// # Errors
    /// - `NotFound` when the event does not exist.
    /// - `Validation` when the event is inactive or past-dated.
    /// - `Conflict` when the pair already has an active registration.
    pub async fn register(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> CoreResult<RegistrationWithEvent> {
        let event = self
            .store
            .get_event(event_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("event {event_id}")))?;

        if !event.active {
            return Err(CoreError::validation(format!(
                "event {event_id} is no longer active"
            )));
        }
        let now = Utc::now();
        if event.date < now {
            return Err(CoreError::validation(format!(
                "event {event_id} is dated in the past"
            )));
        }

        // A cancelled registration for the same pair does not block; only an
        // active one conflicts. Checked by scan, so see the module caveat.
        let duplicates = self
            .store
            .scan_registrations(&move |registration: &Registration| {
                registration.user_id == user_id
                    && registration.event_id == event_id
                    && registration.active
            })
            .await?;
        if !duplicates.is_empty() {
            return Err(CoreError::Conflict(format!(
                "user {user_id} already registered for event {event_id}"
            )));
        }

        let registration = Registration {
            registration_id: new_record_id(),
            user_id: user_id.to_string(),
            event_id: event_id.to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        };
        let registration = self.store.put_registration(registration).await?;
        tracing::info!(
            registration_id = %registration.registration_id,
            user_id,
            event_id,
            "registration created"
        );

        if let Some(user) = self.lookup_user_for_notify(user_id).await {
            if let Err(err) = self.notifier.on_registration_created(&event, &user).await {
                tracing::warn!(error = %err, registration_id = %registration.registration_id,
                    "registration-created notification failed");
            }
        }

        Ok(RegistrationWithEvent {
            registration,
            event,
        })
    }

    /// Cancel a registration on behalf of `requester_id`.
    ///
    /// Admin bypass is the resolver's job upstream and is not re-checked
    /// here. Cancelling an already-inactive registration proceeds and simply
    /// rewrites `active = false`; double-cancel is not an error.
    pub async fn cancel(
        &self,
        registration_id: &str,
        requester_id: &str,
    ) -> CoreResult<Registration> {
        let mut registration = self
            .store
            .get_registration(registration_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("registration {registration_id}")))?;

        if registration.user_id != requester_id {
            return Err(CoreError::Authorization(format!(
                "registration {registration_id} does not belong to requester"
            )));
        }

        registration.active = false;
        registration.updated_at = Utc::now();
        let registration = self.store.put_registration(registration).await?;
        tracing::info!(registration_id, "registration cancelled");

        if let Some(event) = self.store.get_event(&registration.event_id).await.ok().flatten() {
            if let Some(user) = self.lookup_user_for_notify(&registration.user_id).await {
                if let Err(err) = self.notifier.on_registration_cancelled(&event, &user).await {
                    tracing::warn!(error = %err, registration_id,
                        "registration-cancelled notification failed");
                }
            }
        }

        Ok(registration)
    }

    /// List a user's active registrations, joined with their events.
    ///
    /// # Errors
    /// - `Forbidden` unless the requester is the listed user (admin bypass is
    ///   external to this method).
    /// - `NotFound` when a registration references an event that no longer
    ///   resolves; the store has no referential integrity and corruption must
    ///   surface rather than shrink totals silently.
    pub async fn list_for_user(
        &self,
        user_id: &str,
        requester_id: &str,
        request: PageRequest,
    ) -> CoreResult<Page<RegistrationWithEvent>> {
        if requester_id != user_id {
            return Err(CoreError::Forbidden(
                "cannot list another user's registrations".to_string(),
            ));
        }

        let filter = RegistrationFilter {
            user_id: Some(user_id.to_string()),
            active: Some(true),
            ..RegistrationFilter::default()
        };
        let request = request.with_defaults(self.config.default_page_limit);
        let page = query::list_registrations(self.store.as_ref(), &filter, request).await?;

        let mut items = Vec::with_capacity(page.items.len());
        for registration in page.items {
            let event = self
                .store
                .get_event(&registration.event_id)
                .await?
                .ok_or_else(|| {
                    CoreError::NotFound(format!(
                        "event {} referenced by registration {}",
                        registration.event_id, registration.registration_id
                    ))
                })?;
            items.push(RegistrationWithEvent {
                registration,
                event,
            });
        }

        Ok(Page {
            items,
            total: page.total,
            page: page.page,
            limit: page.limit,
        })
    }

    /// Best-effort user fetch for notification payloads. A missing or
    /// unreadable user skips the notification; the state transition already
    /// happened and is never rolled back.
    async fn lookup_user_for_notify(&self, user_id: &str) -> Option<User> {
        match self.store.get_user(user_id).await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                tracing::debug!(user_id, "user absent, skipping notification");
                None
            }
            Err(err) => {
                tracing::debug!(user_id, error = %err, "user lookup failed, skipping notification");
                None
            }
        }
    }
}
