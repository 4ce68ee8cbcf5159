//! Wire-level user types shared between the gateway and the console.

use crate::domain::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Active/Inactive account flag, distinct from the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        })
    }
}

/// A user record as the backend returns it.
///
/// The console never owns one of these authoritatively: every copy is a
/// snapshot from the last successful list query and goes stale the moment
/// any write (this session's or another's) succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    /// Stored as "first last"; split for editing via the compound helpers.
    pub name: String,
    pub phone_number: String,
    pub email: String,
    /// Stored as "line1 line2", same convention as `name`.
    pub address: String,
    pub role_id: i32,
    /// RFC 3339, set once at creation.
    pub date_created: String,
    /// Absent until the first successful edit. Status toggles do not set
    /// it; that inconsistency comes from the backend contract.
    pub date_edited: Option<String>,
    pub status: UserStatus,
}

/// Mutation payload for `createUser` and `updateUser`.
///
/// The create payload carries no id and sends an explicit null
/// `dateEdited`; the update payload carries the id and omits
/// `dateCreated` and `status`, which the backend leaves untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub role_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    pub date_edited: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}
