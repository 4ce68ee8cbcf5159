//! Edit flow for one existing record.

use crate::console::form::{UserForm, ValidationError};
use crate::domain::{join_address, join_full_name, RoleError, UserId};
use crate::gateway::UserGateway;
use crate::models::{UserInput, UserRecord};
use chrono::Utc;
use tracing::{error, info};

/// What happened to a submission that got past validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The backend accepted the update. The caller must resync the
    /// directory now; the editor has already closed.
    Updated(UserRecord),
    /// The mutation failed. Already logged; the editor stays open and
    /// the user sees nothing.
    Failed,
}

/// Pre-filled form plus the update mutation for one record.
///
/// The editor works on a snapshot copy; `id`, `status` and `dateCreated`
/// are never part of the update payload.
#[derive(Debug)]
pub struct UserEditor {
    record: UserRecord,
    pub form: UserForm,
    open: bool,
}

impl UserEditor {
    /// Derives initial form values from a record snapshot.
    pub fn from_record(record: UserRecord) -> Result<Self, RoleError> {
        let form = UserForm::from_record(&record)?;
        Ok(Self {
            record,
            form,
            open: true,
        })
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.record.id
    }

    #[must_use]
    pub const fn record(&self) -> &UserRecord {
        &self.record
    }

    /// Dismisses the editor without submitting.
    pub const fn cancel(&mut self) {
        self.open = false;
    }

    /// Validates and, if clean, sends the update mutation.
    ///
    /// A [`ValidationError`] means the mutation was never sent and the
    /// editor stays open. On a successful mutation the editor closes and
    /// the caller is responsible for resyncing the directory. On a
    /// mutation failure the error is only logged and the editor stays
    /// open.
    pub async fn submit(
        &mut self,
        gateway: &dyn UserGateway,
    ) -> Result<EditOutcome, ValidationError> {
        let values = self.form.validate()?;

        let update = UserInput {
            id: Some(self.record.id),
            name: join_full_name(&values.first_name, &values.last_name),
            phone_number: values.contact,
            email: values.email,
            address: join_address(&values.address1, &values.address2),
            role_id: values.role.id(),
            date_created: None,
            date_edited: Some(Utc::now().to_rfc3339()),
            status: None,
        };

        match gateway.update_user(update).await {
            Ok(updated) => {
                info!(user_id = %updated.id, "User updated");
                self.open = false;
                Ok(EditOutcome::Updated(updated))
            }
            Err(err) => {
                error!(user_id = %self.record.id, "Error updating user: {err}");
                Ok(EditOutcome::Failed)
            }
        }
    }
}
