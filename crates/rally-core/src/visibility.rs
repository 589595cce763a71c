//! Organizer-scoped registration visibility.
//!
//! The store has no join and no foreign-key index, so "registrations for my
//! events" is a two-phase scan intersection: collect the organizer's event
//! ids, then filter the registration table against that set. Worst case is
//! O(events_by_organizer x all_registrations); accepted at this scope.
use crate::errors::CoreResult;
use crate::model::{Event, Registration, RegistrationWithEvent};
use crate::query::{paginate, Page, PageRequest};
use crate::store::RegistryStore;
use std::collections::{HashMap, HashSet};

/// List registrations tied to events organized by `organizer_id`.
///
/// Phase one scans Events for the organizer, keeping the full records so the
/// join needs no second Event lookup. If the organizer owns no events the
/// result short-circuits to an empty page with `total = 0` without scanning
/// Registrations at all.
pub async fn list_for_organizer(
    store: &dyn RegistryStore,
    organizer_id: &str,
    request: PageRequest,
) -> CoreResult<Page<RegistrationWithEvent>> {
    let owned = store
        .scan_events(&move |event: &Event| event.organizer_id == organizer_id)
        .await?;
    if owned.is_empty() {
        return Ok(Page::empty(request));
    }

    let events_by_id: HashMap<String, Event> = owned
        .into_iter()
        .map(|event| (event.event_id.clone(), event))
        .collect();

    let keep: HashSet<String> = events_by_id.keys().cloned().collect();
    let matched = store
        .scan_registrations(&move |registration: &Registration| {
            keep.contains(&registration.event_id)
        })
        .await?;

    let page = paginate(matched, request);
    let items = page
        .items
        .into_iter()
        .map(|registration| {
            // Invariant of phase one: every kept registration's event is in hand.
            let event = events_by_id[&registration.event_id].clone();
            RegistrationWithEvent {
                registration,
                event,
            }
        })
        .collect();

    Ok(Page {
        items,
        total: page.total,
        page: page.page,
        limit: page.limit,
    })
}
