//! Authorization layer of the registration core.
//!
//! # Purpose
//! Bridges the pure decision table in `rally-authz` with the store: fetching
//! the target resource when ownership is not self-evident from the request,
//! and collapsing lookup failures into a deny.
mod resolver;

pub use resolver::{OwnershipResolver, ResourceRef};
