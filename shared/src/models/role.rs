//! User role

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role attached to every user account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Admin,
    SubAdmin,
    SuperAdmin,
}

impl Role {
    /// Every assignable role
    pub const ALL: [Role; 4] = [Role::User, Role::Admin, Role::SubAdmin, Role::SuperAdmin];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
            Role::SubAdmin => "SubAdmin",
            Role::SuperAdmin => "SuperAdmin",
        }
    }

    /// Admin capability: catalog management, user roles, bulk transfer.
    ///
    /// SubAdmin is deliberately not included.
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
