//! Data access to the backend gateway.
//!
//! The backend is the single authoritative store. The console reaches it
//! through the [`UserGateway`] trait so the sync contract can be tested
//! against an in-memory double, with [`graphql::GraphQlGateway`] as the
//! production implementation.

pub mod graphql;

pub use graphql::GraphQlGateway;

use crate::domain::UserId;
use crate::models::{UserInput, UserRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The list query failed; the directory surfaces this inline.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// A create/update/status-change call failed or was rejected. Callers
    /// log this and move on; it is never shown to the user.
    #[error("mutation failed: {0}")]
    Mutation(String),
}

/// Action code for the bulk status-change mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Deactivate,
    Activate,
}

impl StatusAction {
    /// The integer the mutation signature expects: 1 activates, 0
    /// deactivates.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Deactivate => 0,
            Self::Activate => 1,
        }
    }
}

/// The four operations the backend exposes.
///
/// Every call is an independent, non-cancelable async request. Nothing is
/// deduplicated or ordered here; the backend's own write order is
/// authoritative. A caller that performs a write is responsible for
/// resyncing the directory afterwards.
#[async_trait::async_trait]
pub trait UserGateway: Send + Sync {
    /// Fetches the full user list (`allUsers`).
    async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError>;

    /// Creates a new user (`createUser`) and returns the stored record.
    async fn create_user(&self, new_user: UserInput) -> Result<UserRecord, GatewayError>;

    /// Updates an existing user (`updateUser`) and returns the stored
    /// record.
    async fn update_user(&self, update: UserInput) -> Result<UserRecord, GatewayError>;

    /// Flips the status flag for the given users
    /// (`activateDeactivateUsers`). Returns the backend's success flag,
    /// not the updated records.
    async fn set_status(
        &self,
        user_ids: &[UserId],
        action: StatusAction,
    ) -> Result<bool, GatewayError>;
}
