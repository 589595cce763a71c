//! Rally authorization primitives shared by the registration core.
//!
//! # Purpose
//! Centralizes the principal model and the closed ownership decision table
//! used for every read and mutation in the platform.
//!
//! # How it fits
//! The registration core resolves the owner of a target resource (one store
//! lookup at most) and then asks this crate for the verdict. Keeping the
//! table here, free of store access, means the rules can be tested
//! exhaustively and cannot drift between endpoints.
//!
//! # Key invariants
//! - The table is evaluated first-match-wins: admin, then no-concrete-target,
//!   then owner comparison. Everything else is a deny.
//! - A deny is a normal outcome, not an error. The only error this crate
//!   knows is an absent principal, which is a precondition failure upstream
//!   of any decision.
//!
//! # Examples
//! ```rust
//! use rally_authz::{decide, Decision, OwnerRef, Principal, Role};
//!
//! let alice = Principal::new("u-alice", Role::Participant);
//! assert_eq!(decide(&alice, OwnerRef::Resolved("u-alice")), Decision::Allow);
//! assert_eq!(decide(&alice, OwnerRef::Resolved("u-bob")), Decision::Deny);
//! ```

mod decision;
mod errors;
mod principal;

pub use decision::{decide, Decision, OwnerRef};
pub use errors::{AuthzError, AuthzResult};
pub use principal::{Principal, Role};
