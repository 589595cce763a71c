//! The ownership decision table.
//!
//! Keeping the table in one place avoids authorization drift across
//! endpoints; every resolver path funnels into [`decide`].
use crate::principal::Principal;

/// Outcome of an ownership check. A deny is a normal boolean gate that the
/// request layer turns into a 403, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(self) -> bool {
        self == Decision::Allow
    }
}

/// What the caller learned about the target resource's owner before asking
/// for a verdict.
///
/// - `NotRequired`: the request carries no concrete resource id (creates);
///   ownership is established at creation time, not checked beforehand.
/// - `Resolved`: the owner field of the fetched record.
/// - `Unresolved`: the lookup failed, whether not-found or transport error.
///   Both collapse to the same input so a caller probing this channel cannot
///   distinguish "doesn't exist" from "exists but not yours".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerRef<'a> {
    NotRequired,
    Resolved(&'a str),
    Unresolved,
}

/// Evaluate the decision table, first match wins:
///
/// 1. admin principal → allow
/// 2. no concrete resource id → allow
/// 3. owner equals principal id → allow
/// 4. otherwise (non-owner, or lookup failed) → deny
pub fn decide(principal: &Principal, owner: OwnerRef<'_>) -> Decision {
    if principal.is_admin() {
        return Decision::Allow;
    }
    match owner {
        OwnerRef::NotRequired => Decision::Allow,
        OwnerRef::Resolved(owner_id) if owner_id == principal.id => Decision::Allow,
        OwnerRef::Resolved(_) | OwnerRef::Unresolved => Decision::Deny,
    }
}
