//! Store-backed ownership resolution.
//!
//! Every mutating and read endpoint consults this resolver before any domain
//! logic runs. The verdict is a plain allow/deny; only the absence of an
//! authenticated principal is a hard error.
use crate::errors::CoreResult;
use crate::store::RegistryStore;
use rally_authz::{decide, AuthzError, Decision, OwnerRef, Principal};
use std::sync::Arc;

/// Reference to the resource a request targets.
///
/// `None` ids model creation requests: there is no concrete record yet, so
/// ownership is established at creation time rather than checked here.
#[derive(Debug, Clone)]
pub enum ResourceRef<'a> {
    /// An event; owner field is `organizer_id`.
    Event(Option<&'a str>),
    /// A registration; owner field is `user_id`.
    Registration(Option<&'a str>),
    /// A self-keyed resource such as a user profile; ownership is decided by
    /// comparing the supplied owner id against the principal, no lookup.
    SelfOwned { owner_id: Option<&'a str> },
}

pub struct OwnershipResolver {
    store: Arc<dyn RegistryStore>,
}

impl OwnershipResolver {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Resolve the owner of `resource` (at most one `get`) and evaluate the
    /// decision table.
    ///
    /// Lookup failures, whether not-found or transport, resolve to `Deny`
    /// rather than an error: a caller must not be able to tell "doesn't
    /// exist" from "exists but not yours" through this channel. The transport
    /// error is still logged for operators.
    pub async fn resolve(
        &self,
        principal: Option<&Principal>,
        resource: ResourceRef<'_>,
    ) -> CoreResult<Decision> {
        let principal = principal.ok_or(AuthzError::MissingPrincipal)?;
        let owner = match resource {
            ResourceRef::Event(None)
            | ResourceRef::Registration(None)
            | ResourceRef::SelfOwned { owner_id: None } => {
                return Ok(decide(principal, OwnerRef::NotRequired));
            }
            ResourceRef::SelfOwned {
                owner_id: Some(owner_id),
            } => return Ok(decide(principal, OwnerRef::Resolved(owner_id))),
            ResourceRef::Event(Some(event_id)) => match self.store.get_event(event_id).await {
                Ok(found) => found.map(|event| event.organizer_id),
                Err(err) => {
                    tracing::debug!(
                        error = %err,
                        backend = self.store.backend_name(),
                        "event owner lookup failed, resolving to deny"
                    );
                    None
                }
            },
            ResourceRef::Registration(Some(registration_id)) => {
                match self.store.get_registration(registration_id).await {
                    Ok(found) => found.map(|registration| registration.user_id),
                    Err(err) => {
                        tracing::debug!(
                            error = %err,
                            backend = self.store.backend_name(),
                            "registration owner lookup failed, resolving to deny"
                        );
                        None
                    }
                }
            }
        };

        let verdict = match &owner {
            Some(owner_id) => decide(principal, OwnerRef::Resolved(owner_id.as_str())),
            None => decide(principal, OwnerRef::Unresolved),
        };
        Ok(verdict)
    }
}
