use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Portal roles. Wire names are the capitalized forms the backend returns in
/// `userType`; path slugs are the lowercase forms used in `/login/{role}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Civilian,
    Lawyer,
    Police,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Civilian, Role::Lawyer, Role::Police];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Civilian => "Civilian",
            Role::Lawyer => "Lawyer",
            Role::Police => "Police",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Role::Civilian => "civilian",
            Role::Lawyer => "lawyer",
            Role::Police => "police",
        }
    }

    /// Accepts both the wire name and the path slug.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "Civilian" | "civilian" => Some(Role::Civilian),
            "Lawyer" | "lawyer" => Some(Role::Lawyer),
            "Police" | "police" => Some(Role::Police),
            _ => None,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who the session belongs to. Exhaustively matched everywhere a role matters,
/// so adding a role is a compile-time-checked change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    #[default]
    Anonymous,
    Civilian { civilian_id: String },
    Lawyer { lawyer_id: String },
    Police { badge_id: String },
}

impl Identity {
    pub fn role(&self) -> Option<Role> {
        match self {
            Identity::Anonymous => None,
            Identity::Civilian { .. } => Some(Role::Civilian),
            Identity::Lawyer { .. } => Some(Role::Lawyer),
            Identity::Police { .. } => Some(Role::Police),
        }
    }

    /// The role-specific opaque identifier, when authenticated.
    pub fn id(&self) -> Option<&str> {
        match self {
            Identity::Anonymous => None,
            Identity::Civilian { civilian_id } => Some(civilian_id),
            Identity::Lawyer { lawyer_id } => Some(lawyer_id),
            Identity::Police { badge_id } => Some(badge_id),
        }
    }
}

/// The authenticated-identity state of the portal process. Created on a
/// successful login response, replaced wholesale on role switch, reset on
/// logout. The default value is the anonymous session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    #[serde(default)]
    pub username: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self { Self::default() }

    pub fn new(identity: Identity, username: impl Into<String>) -> Self {
        Self { identity, username: Some(username.into()) }
    }

    pub fn authenticated(&self) -> bool { !matches!(self.identity, Identity::Anonymous) }

    pub fn role(&self) -> Option<Role> { self.identity.role() }

    /// Display name for greetings; falls back to the role-specific id.
    pub fn display_name(&self) -> &str {
        match (&self.username, self.identity.id()) {
            (Some(u), _) => u.as_str(),
            (None, Some(id)) => id,
            (None, None) => "guest",
        }
    }
}
