//! Unified error handling for the address book
//!
//! Every fallible operation in the crate returns [`AddressBookError`]. Each
//! variant is classified into an [`ErrorCategory`] and carries a
//! user-facing message separate from its `Display` text, which is meant for
//! logs.

use std::fmt;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for the address book
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// The target person is not present in the address book
    #[error("Person not found: {name}")]
    PersonNotFound { name: String },

    /// Adding a person that is already present
    #[error("Duplicate person: {name}")]
    DuplicatePerson { name: String },

    /// A field value failed validation
    #[error("Illegal value for {field}: '{value}' ({constraint})")]
    IllegalValue {
        field: &'static str,
        value: String,
        constraint: &'static str,
    },

    /// Reading or writing the book file failed
    #[error("Storage error: {message} (path: {path})")]
    Storage {
        message: String,
        path: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Coarse classification, mapped to the process exit code by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
    Validation,
    Storage,
    Config,
}

impl ErrorCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Conflict => "conflict",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Config => "config",
        }
    }

    /// sysexits-style exit code for this category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCategory::NotFound => 66,
            ErrorCategory::Conflict | ErrorCategory::Validation => 65,
            ErrorCategory::Storage => 74,
            ErrorCategory::Config => 78,
        }
    }
}

impl From<ErrorCategory> for ExitCode {
    fn from(category: ErrorCategory) -> Self {
        ExitCode::from(category.exit_code())
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl AddressBookError {
    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            AddressBookError::PersonNotFound { .. } => ErrorCategory::NotFound,
            AddressBookError::DuplicatePerson { .. } => ErrorCategory::Conflict,
            AddressBookError::IllegalValue { .. } => ErrorCategory::Validation,
            AddressBookError::Storage { .. } => ErrorCategory::Storage,
            AddressBookError::Config { .. } => ErrorCategory::Config,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AddressBookError::PersonNotFound { .. } => {
                crate::config::MESSAGE_PERSON_NOT_IN_ADDRESSBOOK.to_string()
            }
            AddressBookError::DuplicatePerson { .. } => {
                crate::config::MESSAGE_DUPLICATE_PERSON.to_string()
            }
            AddressBookError::IllegalValue {
                field, constraint, ..
            } => {
                format!("Invalid {}: {}", field, constraint)
            }
            AddressBookError::Storage { message, path, .. } => {
                format!("Could not access address book file {}: {}", path, message)
            }
            AddressBookError::Config { message } => {
                format!("Configuration problem: {}", message)
            }
        }
    }
}

/// Error creation helpers
pub mod errors {
    use super::*;

    pub fn person_not_found(name: impl Into<String>) -> AddressBookError {
        AddressBookError::PersonNotFound { name: name.into() }
    }

    pub fn duplicate_person(name: impl Into<String>) -> AddressBookError {
        AddressBookError::DuplicatePerson { name: name.into() }
    }

    pub fn illegal_value(
        field: &'static str,
        value: impl Into<String>,
        constraint: &'static str,
    ) -> AddressBookError {
        AddressBookError::IllegalValue {
            field,
            value: value.into(),
            constraint,
        }
    }

    pub fn storage_error(
        message: impl Into<String>,
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> AddressBookError {
        AddressBookError::Storage {
            message: message.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn config_error(message: impl Into<String>) -> AddressBookError {
        AddressBookError::Config {
            message: message.into(),
        }
    }
}

pub type AddressBookResult<T> = Result<T, AddressBookError>;
