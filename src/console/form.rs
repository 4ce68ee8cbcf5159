//! Form values and validation shared by the editor and the creator.
//!
//! Validation runs entirely client-side: a form that fails any rule never
//! reaches the gateway.

use crate::domain::{split_address, split_full_name, Role, RoleError};
use crate::models::UserRecord;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

// Ported unchanged from the backend's accepted phone format.
const PHONE_PATTERN: &str =
    r"^((\+[1-9]{1,4}[ -]?)|(\([0-9]{2,3}\)[ -]?)|([0-9]{2,4})[ -]?)*?[0-9]{3,4}[ -]?[0-9]{3,4}$";

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("Invalid regex"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid regex"))
}

/// A single failed rule, keyed by the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All rules that failed for one submission attempt.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == name)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "validation failed: {}", joined.join(", "))
    }
}

/// Raw text values as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub address1: String,
    pub address2: String,
    pub role: String,
}

/// A form that passed every rule, with the role label already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: String,
    pub address1: String,
    pub address2: String,
    pub role: Role,
}

impl UserForm {
    /// Empty initial values for the create flow.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pre-fills the form from a record snapshot for the edit flow.
    ///
    /// Fails if the snapshot carries a role id outside the closed set;
    /// such a record cannot be represented in the role selector.
    pub fn from_record(record: &UserRecord) -> Result<Self, RoleError> {
        let (first_name, last_name) = split_full_name(&record.name);
        let (address1, address2) = split_address(&record.address);
        let role = Role::from_id(record.role_id)?;

        Ok(Self {
            first_name,
            last_name,
            email: record.email.clone(),
            contact: record.phone_number.clone(),
            address1,
            address2,
            role: role.label().to_string(),
        })
    }

    /// Checks every rule and resolves the role label.
    ///
    /// All failures are collected rather than stopping at the first, so a
    /// host can mark every offending field at once.
    pub fn validate(&self) -> Result<ValidatedForm, ValidationError> {
        let mut errors = Vec::new();

        let mut require = |field: &'static str, value: &str| {
            if value.is_empty() {
                errors.push(FieldError {
                    field,
                    message: "required".to_string(),
                });
            }
        };

        require("firstName", &self.first_name);
        require("lastName", &self.last_name);
        require("email", &self.email);
        require("contact", &self.contact);
        require("address1", &self.address1);
        require("address2", &self.address2);
        require("role", &self.role);

        if !self.email.is_empty() && !email_regex().is_match(&self.email) {
            errors.push(FieldError {
                field: "email",
                message: "invalid email".to_string(),
            });
        }

        if !self.contact.is_empty() && !phone_regex().is_match(&self.contact) {
            errors.push(FieldError {
                field: "contact",
                message: "Phone number is not valid".to_string(),
            });
        }

        let role = if self.role.is_empty() {
            None
        } else {
            match Role::from_label(&self.role) {
                Ok(role) => Some(role),
                Err(err) => {
                    errors.push(FieldError {
                        field: "role",
                        message: err.to_string(),
                    });
                    None
                }
            }
        };

        if !errors.is_empty() {
            return Err(ValidationError { errors });
        }

        Ok(ValidatedForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            contact: self.contact.clone(),
            address1: self.address1.clone(),
            address2: self.address2.clone(),
            // Every field was checked above, including role presence.
            role: role.expect("role validated"),
        })
    }
}
