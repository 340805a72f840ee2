//! Address book library
//!
//! Command-driven contact management over an in-memory, ordered address
//! book. The centrepiece is `deletebyname`, which removes every person whose
//! name shares a word with the supplied keywords.

pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod shared;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use commands::{Command, CommandResult, DeleteByNameCommand, ListCommand};
pub use data::{Address, AddressBook, Email, Name, Person, PersonStore, Phone, Tag};
pub use error::{AddressBookError, AddressBookResult, ErrorCategory};
pub use shared::SharedAddressBook;
pub use storage::{BookFile, PersonRecord};
