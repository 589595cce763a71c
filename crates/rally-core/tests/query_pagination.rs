mod common;

use chrono::{Duration, Utc};
use common::{future_event, seed_event, store_with_users};
use rally_core::query::{
    list_events, list_registrations, EventFilter, PageRequest, RegistrationFilter,
};
use rally_core::store::RegistryStore;
use std::collections::HashSet;

#[tokio::test]
async fn empty_filter_returns_whole_scan_paginated() {
    let store = store_with_users(&[]).await;
    for i in 0..7 {
        seed_event(&store, future_event(&format!("e-{i}"), &format!("Event {i}"), "u-org")).await;
    }

    let page = list_events(store.as_ref(), &EventFilter::default(), PageRequest::new(1, 5))
        .await
        .expect("list");
    assert_eq!(page.total, 7);
    assert_eq!(page.items.len(), 5);
}

#[tokio::test]
async fn pagination_sums_to_total_without_overlap() {
    // Pagination contract: the union of all pages is the post-filter set and
    // page sizes sum to `total`, drawn from the same underlying scan shape.
    let store = store_with_users(&[]).await;
    for i in 0..10 {
        seed_event(&store, future_event(&format!("e-{i}"), &format!("Event {i}"), "u-org")).await;
    }

    let filter = EventFilter::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut count = 0;
    for page_no in 1..=4 {
        let page = list_events(store.as_ref(), &filter, PageRequest::new(page_no, 3))
            .await
            .expect("list");
        assert_eq!(page.total, 10);
        count += page.items.len();
        for event in page.items {
            seen.insert(event.event_id);
        }
    }
    assert_eq!(count, 10);
    assert_eq!(seen.len(), 10);
}

#[tokio::test]
async fn name_contains_filter() {
    let store = store_with_users(&[]).await;
    seed_event(&store, future_event("e-1", "RustConf", "u-org")).await;
    seed_event(&store, future_event("e-2", "JsConf", "u-org")).await;
    seed_event(&store, future_event("e-3", "Rust Meetup", "u-org")).await;

    let filter = EventFilter {
        name_contains: Some("Rust".to_string()),
        ..EventFilter::default()
    };
    let page = list_events(store.as_ref(), &filter, PageRequest::default())
        .await
        .expect("list");
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn date_range_filter_is_inclusive_of_bounds() {
    let store = store_with_users(&[]).await;
    let base = Utc::now() + Duration::days(10);
    for (id, offset) in [("e-early", -5), ("e-mid", 0), ("e-late", 5)] {
        let mut event = future_event(id, id, "u-org");
        event.date = base + Duration::days(offset);
        seed_event(&store, event).await;
    }

    let filter = EventFilter {
        date_from: Some(base - Duration::days(5)),
        date_to: Some(base),
        ..EventFilter::default()
    };
    let page = list_events(store.as_ref(), &filter, PageRequest::default())
        .await
        .expect("list");
    let mut ids: Vec<String> = page.items.into_iter().map(|e| e.event_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["e-early", "e-mid"]);
}

#[tokio::test]
async fn boolean_equals_filter_on_registrations() {
    let store = store_with_users(&[]).await;
    let now = Utc::now();
    for (id, active) in [("r-1", true), ("r-2", false), ("r-3", true)] {
        store
            .put_registration(rally_core::model::Registration {
                registration_id: id.to_string(),
                user_id: "u-ann".to_string(),
                event_id: "e-1".to_string(),
                active,
                created_at: now,
                updated_at: now,
            })
            .await
            .expect("seed");
    }

    let filter = RegistrationFilter {
        user_id: Some("u-ann".to_string()),
        active: Some(true),
        ..RegistrationFilter::default()
    };
    let page = list_registrations(store.as_ref(), &filter, PageRequest::default())
        .await
        .expect("list");
    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|r| r.active));
}

#[tokio::test]
async fn degenerate_page_and_limit_are_normalized() {
    let store = store_with_users(&[]).await;
    seed_event(&store, future_event("e-1", "One", "u-org")).await;

    let page = list_events(store.as_ref(), &EventFilter::default(), PageRequest::new(0, 0))
        .await
        .expect("list");
    assert_eq!(page.page, 1);
    assert!(page.limit >= 1);
    assert_eq!(page.items.len(), 1);
}
