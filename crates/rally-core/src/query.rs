//! Query composition and pagination over the scan-based store.
//!
//! # Purpose
//! Translates optional filter fields into a single scan predicate, runs one
//! scan, and paginates by index slicing the post-filter result. The store
//! returns scans unordered, so there is **no stable ordering across pages**;
//! `total` always counts the full post-filter set of the scan that produced
//! the page. Callers wanting indexed-query semantics get a faithful emulation
//! of them, weaknesses included.
use crate::config::DEFAULT_PAGE_LIMIT;
use crate::errors::CoreResult;
use crate::model::{Event, Registration};
use crate::store::RegistryStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 1-based page request. Values below 1 are normalized rather than rejected;
/// upstream DTO validation is expected to have run already.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Clamp `page` to 1 and replace a non-positive `limit` with the
    /// provider-chosen default.
    pub fn with_defaults(self, default_limit: usize) -> Self {
        Self {
            page: self.page.max(1),
            limit: if self.limit < 1 {
                default_limit
            } else {
                self.limit
            },
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// One page of post-filter results. `total` counts every post-filter item of
/// the underlying scan, not just the slice returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl<T> Page<T> {
    pub fn empty(request: PageRequest) -> Self {
        let request = request.with_defaults(DEFAULT_PAGE_LIMIT);
        Self {
            items: Vec::new(),
            total: 0,
            page: request.page,
            limit: request.limit,
        }
    }
}

/// Slice the half-open range `[(page-1)*limit, (page-1)*limit + limit)` out
/// of the post-filter result set.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let request = request.with_defaults(DEFAULT_PAGE_LIMIT);
    let total = items.len();
    let offset = (request.page - 1).saturating_mul(request.limit);
    let items = items
        .into_iter()
        .skip(offset)
        .take(request.limit)
        .collect();
    Page {
        items,
        total,
        page: request.page,
        limit: request.limit,
    }
}

/// Optional filter fields for event scans; an empty filter matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilter {
    pub name_contains: Option<String>,
    pub organizer_id: Option<String>,
    pub active: Option<bool>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(fragment) = &self.name_contains {
            if !event.name.contains(fragment.as_str()) {
                return false;
            }
        }
        if let Some(organizer_id) = &self.organizer_id {
            if &event.organizer_id != organizer_id {
                return false;
            }
        }
        if let Some(active) = self.active {
            if event.active != active {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if event.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if event.date > to {
                return false;
            }
        }
        true
    }
}

/// Optional filter fields for registration scans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationFilter {
    pub user_id: Option<String>,
    pub event_id: Option<String>,
    pub active: Option<bool>,
}

impl RegistrationFilter {
    pub fn matches(&self, registration: &Registration) -> bool {
        if let Some(user_id) = &self.user_id {
            if &registration.user_id != user_id {
                return false;
            }
        }
        if let Some(event_id) = &self.event_id {
            if &registration.event_id != event_id {
                return false;
            }
        }
        if let Some(active) = self.active {
            if registration.active != active {
                return false;
            }
        }
        true
    }
}

/// One scan, then slice. The page and the `total` both come from the same
/// scan result, so they are mutually consistent even though a later page may
/// be served from a different scan.
pub async fn list_events(
    store: &dyn RegistryStore,
    filter: &EventFilter,
    request: PageRequest,
) -> CoreResult<Page<Event>> {
    let matched = store.scan_events(&|event| filter.matches(event)).await?;
    Ok(paginate(matched, request))
}

pub async fn list_registrations(
    store: &dyn RegistryStore,
    filter: &RegistrationFilter,
    request: PageRequest,
) -> CoreResult<Page<Registration>> {
    let matched = store
        .scan_registrations(&|registration| filter.matches(registration))
        .await?;
    Ok(paginate(matched, request))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_half_open_range() {
        let items: Vec<u32> = (0..10).collect();
        let page = paginate(items, PageRequest::new(2, 3));
        assert_eq!(page.items, vec![3, 4, 5]);
        assert_eq!(page.total, 10);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 3);
    }

    #[test]
    fn paginate_past_the_end_is_empty_with_full_total() {
        let items: Vec<u32> = (0..4).collect();
        let page = paginate(items, PageRequest::new(3, 3));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 4);
    }

    #[test]
    fn paginate_normalizes_degenerate_requests() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(items.clone(), PageRequest::new(0, 2));
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![0, 1]);

        let page = paginate(items, PageRequest::new(1, 0));
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn empty_filters_match_everything() {
        let now = Utc::now();
        let event = Event {
            event_id: "e1".to_string(),
            name: "RustConf".to_string(),
            date: now,
            organizer_id: "org-1".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        };
        assert!(EventFilter::default().matches(&event));

        let registration = Registration {
            registration_id: "r1".to_string(),
            user_id: "u1".to_string(),
            event_id: "e1".to_string(),
            active: false,
            created_at: now,
            updated_at: now,
        };
        assert!(RegistrationFilter::default().matches(&registration));
    }

    #[test]
    fn event_filter_composes_fields() {
        let now = Utc::now();
        let event = Event {
            event_id: "e1".to_string(),
            name: "RustConf 2031".to_string(),
            date: now,
            organizer_id: "org-1".to_string(),
            active: true,
            created_at: now,
            updated_at: now,
        };

        let filter = EventFilter {
            name_contains: Some("Conf".to_string()),
            organizer_id: Some("org-1".to_string()),
            active: Some(true),
            date_from: Some(now - chrono::Duration::hours(1)),
            date_to: Some(now + chrono::Duration::hours(1)),
        };
        assert!(filter.matches(&event));

        let mut wrong_name = filter.clone();
        wrong_name.name_contains = Some("JsConf".to_string());
        assert!(!wrong_name.matches(&event));

        let mut out_of_range = filter;
        out_of_range.date_to = Some(now - chrono::Duration::minutes(1));
        assert!(!out_of_range.matches(&event));
    }
}
