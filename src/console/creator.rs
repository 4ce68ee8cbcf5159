//! Create flow for a new record.

use crate::console::form::{UserForm, ValidationError};
use crate::domain::{join_address, join_full_name};
use crate::gateway::UserGateway;
use crate::models::{UserInput, UserRecord, UserStatus};
use chrono::Utc;
use tracing::{error, info};

/// What happened to a submission that got past validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The backend stored the record. Unlike the edit flow, nothing is
    /// resynced here: the directory keeps showing its stale snapshot
    /// until something else triggers a resync. Kept as an inherited
    /// asymmetry, not unified with the other write paths.
    Created(UserRecord),
    /// The mutation failed. Already logged; the form keeps its values.
    Failed,
}

/// Empty form plus the create mutation.
#[derive(Debug, Default)]
pub struct UserCreator {
    pub form: UserForm,
}

impl UserCreator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: UserForm::empty(),
        }
    }

    /// Validates and, if clean, sends the create mutation.
    ///
    /// New accounts always start `Inactive` with no `dateEdited`,
    /// regardless of what was typed. A [`ValidationError`] means the
    /// mutation was never sent. Success is only logged.
    pub async fn submit(
        &mut self,
        gateway: &dyn UserGateway,
    ) -> Result<CreateOutcome, ValidationError> {
        let values = self.form.validate()?;

        let new_user = UserInput {
            id: None,
            name: join_full_name(&values.first_name, &values.last_name),
            phone_number: values.contact,
            email: values.email,
            address: join_address(&values.address1, &values.address2),
            role_id: values.role.id(),
            date_created: Some(Utc::now().to_rfc3339()),
            date_edited: None,
            status: Some(UserStatus::Inactive),
        };

        match gateway.create_user(new_user).await {
            Ok(created) => {
                info!(user_id = %created.id, "User created");
                Ok(CreateOutcome::Created(created))
            }
            Err(err) => {
                error!("Error creating user: {err}");
                Ok(CreateOutcome::Failed)
            }
        }
    }
}
