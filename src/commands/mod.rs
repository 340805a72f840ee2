//! Address book commands
//!
//! A command is built per invocation, executed once against a
//! [`PersonStore`], and dropped. `execute` consumes the command, so a value
//! can never run twice.

pub mod delete_by_name;
pub mod list;
pub mod parser;

pub use delete_by_name::DeleteByNameCommand;
pub use list::ListCommand;
pub use parser::*;

use crate::data::{Person, PersonStore};

/// Outcome of a command, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
    /// False when the command stopped before completing.
    pub succeeded: bool,
    /// Persons the command wants displayed, if any.
    pub relevant_persons: Option<Vec<Person>>,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            succeeded: true,
            relevant_persons: None,
        }
    }

    pub fn failure(feedback_to_user: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            ..Self::new(feedback_to_user)
        }
    }

    pub fn with_persons(feedback_to_user: impl Into<String>, persons: Vec<Person>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            succeeded: true,
            relevant_persons: Some(persons),
        }
    }
}

pub trait Command {
    /// Word that invokes the command.
    const COMMAND_WORD: &'static str;
    /// Usage and example text for help output.
    const MESSAGE_USAGE: &'static str;

    fn execute<S: PersonStore + ?Sized>(self, store: &mut S) -> CommandResult;
}
