//! Per-row action menu.
//!
//! Each row owns an independent two-state machine; no menu state is
//! shared between rows. The menu is the caller for single-row status
//! writes and therefore resyncs the directory itself after a successful
//! one. The bulk mutation accepts many ids, but only the single-row path
//! exists here; the directory's multi-row selection is not wired to it.

use crate::console::directory::UserDirectory;
use crate::console::editor::UserEditor;
use crate::domain::UserId;
use crate::gateway::StatusAction;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

/// Action menu for one directory row.
#[derive(Debug)]
pub struct RecordActionMenu {
    user_id: UserId,
    state: MenuState,
}

impl RecordActionMenu {
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            state: MenuState::Closed,
        }
    }

    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    pub const fn open(&mut self) {
        self.state = MenuState::Open;
    }

    pub const fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    /// Clicking anywhere outside the menu dismisses it.
    pub const fn outside_click(&mut self) {
        self.close();
    }

    /// Activates this row's account.
    ///
    /// On a truthy gateway result the directory is resynced and the menu
    /// closes; on failure a diagnostic is logged and the menu stays open.
    /// No retry, no user-visible error.
    pub async fn activate(&mut self, directory: &mut UserDirectory) {
        self.set_status(directory, StatusAction::Activate).await;
    }

    /// Deactivates this row's account. Same contract as [`Self::activate`].
    pub async fn deactivate(&mut self, directory: &mut UserDirectory) {
        self.set_status(directory, StatusAction::Deactivate).await;
    }

    async fn set_status(&mut self, directory: &mut UserDirectory, action: StatusAction) {
        if self.state != MenuState::Open {
            return;
        }

        let gateway = directory.gateway();
        match gateway.set_status(&[self.user_id], action).await {
            Ok(true) => {
                directory.resync().await;
                self.close();
            }
            Ok(false) => {
                error!(user_id = %self.user_id, ?action, "Status change rejected by gateway");
            }
            Err(err) => {
                error!(user_id = %self.user_id, ?action, "Error changing user status: {err}");
            }
        }
    }

    /// Opens the editor for this row, pre-filled from the directory's
    /// last snapshot. No extra fetch happens here.
    ///
    /// Returns `None` when the menu is closed, the record is missing from
    /// the snapshot, or the snapshot carries an unrepresentable role id;
    /// the menu closes in the latter two cases as if the action had run.
    pub fn edit(&mut self, directory: &UserDirectory) -> Option<UserEditor> {
        if self.state != MenuState::Open {
            return None;
        }

        let Some(record) = directory.record(self.user_id) else {
            warn!(user_id = %self.user_id, "Record missing from snapshot, cannot edit");
            self.close();
            return None;
        };

        match UserEditor::from_record(record.clone()) {
            Ok(editor) => {
                self.close();
                Some(editor)
            }
            Err(err) => {
                error!(user_id = %self.user_id, "Cannot open editor: {err}");
                self.close();
                None
            }
        }
    }
}
