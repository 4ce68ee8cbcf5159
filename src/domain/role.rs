//! The closed role set and its storage encoding.
//!
//! The backend stores roles as the integers 1..=3. Labels are matched
//! case-insensitively; anything outside the closed set is rejected at the
//! boundary instead of being passed through as an arbitrary string.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("invalid role label: '{0}'")]
    InvalidRole(String),

    #[error("invalid role id: {0}")]
    InvalidRoleId(i32),
}

/// Account role, stored by the backend as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Manager, Self::User];

    /// Parses a display label, case-insensitively.
    ///
    /// Total over {"admin", "manager", "user"} in any casing; every other
    /// input fails with [`RoleError::InvalidRole`].
    pub fn from_label(label: &str) -> Result<Self, RoleError> {
        match label.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "user" => Ok(Self::User),
            _ => Err(RoleError::InvalidRole(label.to_string())),
        }
    }

    /// Decodes the storage integer. Total over {1, 2, 3}.
    pub const fn from_id(id: i32) -> Result<Self, RoleError> {
        match id {
            1 => Ok(Self::Admin),
            2 => Ok(Self::Manager),
            3 => Ok(Self::User),
            other => Err(RoleError::InvalidRoleId(other)),
        }
    }

    /// The storage integer the backend expects.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Admin => 1,
            Self::Manager => 2,
            Self::User => 3,
        }
    }

    /// The display label shown in role selectors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
