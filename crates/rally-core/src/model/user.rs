//! User records, read-only from this core's perspective.
//!
//! The identity collaborator owns user writes; this core only looks users up
//! for ownership checks and notification payloads.
use rally_authz::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}
