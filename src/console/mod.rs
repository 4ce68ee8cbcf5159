//! Console view models and their synchronization contract.
//!
//! None of these types hold authoritative state. The directory keeps a
//! disposable snapshot of the last list query; every write path goes
//! through the gateway and then forces a full resync of that snapshot
//! (except the create flow, which deliberately does not — see
//! [`creator::CreateOutcome::Created`]).

pub mod creator;
pub mod directory;
pub mod editor;
pub mod form;
pub mod menu;

pub use creator::{CreateOutcome, UserCreator};
pub use directory::{AccessBadge, BadgeIcon, DirectoryView, UserDirectory};
pub use editor::{EditOutcome, UserEditor};
pub use form::{FieldError, UserForm, ValidatedForm, ValidationError};
pub use menu::{MenuState, RecordActionMenu};
