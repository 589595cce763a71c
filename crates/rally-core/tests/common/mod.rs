#![allow(dead_code)] // not every test binary uses every fixture

use chrono::{Duration, Utc};
use rally_authz::Role;
use rally_core::model::{Event, User};
use rally_core::store::memory::InMemoryStore;
use rally_core::store::RegistryStore;
use std::sync::Arc;

pub fn future_event(id: &str, name: &str, organizer_id: &str) -> Event {
    let now = Utc::now();
    Event {
        event_id: id.to_string(),
        name: name.to_string(),
        date: now + Duration::days(30),
        organizer_id: organizer_id.to_string(),
        active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn past_event(id: &str, name: &str, organizer_id: &str) -> Event {
    let mut event = future_event(id, name, organizer_id);
    event.date = Utc::now() - Duration::days(1);
    event
}

pub fn user(id: &str, role: Role) -> User {
    User {
        user_id: id.to_string(),
        name: format!("user {id}"),
        email: format!("{id}@example.com"),
        role,
        active: true,
    }
}

pub async fn store_with_users(users: &[User]) -> Arc<InMemoryStore> {
    rally_core::observability::init_tracing();
    let store = Arc::new(InMemoryStore::new());
    for u in users {
        store.put_user(u.clone()).await.expect("seed user");
    }
    store
}

pub async fn seed_event(store: &InMemoryStore, event: Event) -> Event {
    store.put_event(event).await.expect("seed event")
}
