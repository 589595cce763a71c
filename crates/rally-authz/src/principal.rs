use crate::errors::{AuthzError, AuthzResult};
use serde::{Deserialize, Serialize};

/// Platform role attached to an authenticated identity.
///
/// Roles form a closed set; behavior per role is enumerated in the decision
/// table rather than dispatched through trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Organizer,
    Participant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Organizer => "organizer",
            Role::Participant => "participant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Role::Admin),
            "organizer" => Ok(Role::Organizer),
            "participant" => Ok(Role::Participant),
            _ => Err(()),
        }
    }
}

/// Authenticated identity driving an authorization decision.
///
/// Derived per-request by the external identity layer and immutable for the
/// request's lifetime. Never persisted by this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub role: Role,
}

impl Principal {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    /// Build a principal from the raw role string carried by the identity
    /// layer. Unknown roles are rejected rather than defaulted.
    pub fn from_parts(id: impl Into<String>, role: &str) -> AuthzResult<Self> {
        let role = role
            .parse::<Role>()
            .map_err(|_| AuthzError::InvalidRole(role.to_string()))?;
        Ok(Self::new(id, role))
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
