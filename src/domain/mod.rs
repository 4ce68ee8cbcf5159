//! Domain types for user account administration.
//!
//! Strongly typed wrappers over the raw integers and strings the backend
//! gateway speaks, so role ids and user ids cannot be mixed up in the
//! console layer.

pub mod compound;
pub mod role;

pub use compound::{join_address, join_full_name, split_address, split_full_name};
pub use role::{Role, RoleError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user record, assigned by the backend.
///
/// Newtype wrapper so user ids cannot be confused with the other integers
/// (role storage ids, status action codes) flowing through the console.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the underlying i32 value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}
