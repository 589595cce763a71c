//! Rally registration core library crate.
//!
//! # Purpose
//! Implements the access-control and registration-consistency core of the
//! event platform: ownership resolution, the registration lifecycle state
//! machine, scan-based query composition, and organizer-scoped visibility.
//!
//! # Notes
//! Transport binding (HTTP/DTO), identity, email, and object storage are
//! external collaborators; this crate exposes the seams they plug into.
pub mod auth;
pub mod config;
pub mod errors;
pub mod events;
pub mod model;
pub mod notify;
pub mod observability;
pub mod query;
pub mod registration;
pub mod store;
pub mod visibility;
