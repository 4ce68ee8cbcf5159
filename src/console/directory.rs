//! The user directory and its resync contract.
//!
//! The directory is the only component that talks to the list query. It
//! keeps the last successful response as a snapshot for its children (the
//! per-row menus and the editor pre-fill path) and re-issues the full
//! query whenever a write lands. There is no field-level cache patching:
//! a full refetch is the sole consistency mechanism.

use crate::domain::{Role, UserId};
use crate::gateway::UserGateway;
use crate::models::UserRecord;
use std::sync::Arc;
use tracing::debug;

/// Icon variant for the derived access-level badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeIcon {
    AdminShield,
    Security,
    LockOpen,
}

impl BadgeIcon {
    /// Terminal rendering of the icon variant.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::AdminShield => "🛡",
            Self::Security => "🔒",
            Self::LockOpen => "🔓",
        }
    }
}

/// Access-level badge rendered per row, derived purely from the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessBadge {
    pub icon: BadgeIcon,
    /// The numeric label shown next to the icon (the storage id).
    pub level: i32,
}

impl AccessBadge {
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        let icon = match role {
            Role::Admin => BadgeIcon::AdminShield,
            Role::Manager => BadgeIcon::Security,
            Role::User => BadgeIcon::LockOpen,
        };

        Self {
            icon,
            level: role.id(),
        }
    }
}

/// What the hosting view should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryView {
    /// The list query is in flight; show a loading indicator.
    Loading,
    /// The list query failed; show the message and no rows.
    Failed(String),
    /// Rows are available in the snapshot.
    Ready,
}

/// Directory of all user accounts, backed by the gateway's list query.
pub struct UserDirectory {
    gateway: Arc<dyn UserGateway>,
    view: DirectoryView,
    snapshot: Vec<UserRecord>,
}

impl UserDirectory {
    /// A directory starts loading; call [`Self::resync`] to populate it.
    #[must_use]
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self {
            gateway,
            view: DirectoryView::Loading,
            snapshot: Vec::new(),
        }
    }

    /// Re-issues the full list query and replaces the snapshot.
    ///
    /// Every write path calls this after a successful mutation; it is the
    /// only way displayed rows catch up with the backend. On failure the
    /// snapshot is dropped and the view carries the error message.
    pub async fn resync(&mut self) {
        match self.gateway.list_users().await {
            Ok(users) => {
                debug!(count = users.len(), "Directory synchronized");
                self.snapshot = users;
                self.view = DirectoryView::Ready;
            }
            Err(err) => {
                self.snapshot.clear();
                self.view = DirectoryView::Failed(err.to_string());
            }
        }
    }

    #[must_use]
    pub const fn view(&self) -> &DirectoryView {
        &self.view
    }

    /// The last snapshot. Empty unless the view is `Ready`.
    #[must_use]
    pub fn rows(&self) -> &[UserRecord] {
        &self.snapshot
    }

    /// Looks a record up in the last snapshot, without refetching.
    #[must_use]
    pub fn record(&self, id: UserId) -> Option<&UserRecord> {
        self.snapshot.iter().find(|u| u.id == id)
    }

    /// Badge for a row, or `None` when the stored role id is outside the
    /// closed set.
    #[must_use]
    pub fn badge(record: &UserRecord) -> Option<AccessBadge> {
        Role::from_id(record.role_id).ok().map(AccessBadge::for_role)
    }

    /// Shared gateway handle for the write paths hosted by this
    /// directory's rows.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn UserGateway> {
        Arc::clone(&self.gateway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_gets_exactly_one_icon_variant() {
        let admin = AccessBadge::for_role(Role::Admin);
        assert_eq!(admin.icon, BadgeIcon::AdminShield);
        assert_eq!(admin.level, 1);

        let manager = AccessBadge::for_role(Role::Manager);
        assert_eq!(manager.icon, BadgeIcon::Security);
        assert_eq!(manager.level, 2);

        let user = AccessBadge::for_role(Role::User);
        assert_eq!(user.icon, BadgeIcon::LockOpen);
        assert_eq!(user.level, 3);
    }
}
