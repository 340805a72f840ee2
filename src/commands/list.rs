//! `list`: show every person in the address book.

use tracing::debug;

use super::{Command, CommandResult};
use crate::config::MESSAGE_PERSONS_LISTED_OVERVIEW;
use crate::data::PersonStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl Command for ListCommand {
    const COMMAND_WORD: &'static str = "list";
    const MESSAGE_USAGE: &'static str = "list: Displays all persons in the address book as a list with index numbers.\n\
         Example: list";

    fn execute<S: PersonStore + ?Sized>(self, store: &mut S) -> CommandResult {
        let persons = store.all_persons();
        debug!(count = persons.len(), "listing persons");
        CommandResult::with_persons(
            format!("{} {}", persons.len(), MESSAGE_PERSONS_LISTED_OVERVIEW),
            persons,
        )
    }
}
