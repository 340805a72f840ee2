//! Shared address book for concurrent hosts.
//!
//! Commands snapshot the book and then remove from it, so two commands must
//! never interleave. `run` holds the lock for the whole execution.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use crate::commands::{Command, CommandResult};
use crate::data::AddressBook;

#[derive(Debug, Clone, Default)]
pub struct SharedAddressBook {
    inner: Arc<Mutex<AddressBook>>,
}

impl SharedAddressBook {
    pub fn new(book: AddressBook) -> Self {
        Self {
            inner: Arc::new(Mutex::new(book)),
        }
    }

    /// Execute `command` with exclusive access to the book.
    pub fn run<C: Command>(&self, command: C) -> CommandResult {
        let mut book = self.inner.lock();
        debug!(command = C::COMMAND_WORD, "executing command");
        command.execute(&mut *book)
    }

    /// Copy of the current book contents.
    pub fn snapshot(&self) -> AddressBook {
        self.inner.lock().clone()
    }
}
