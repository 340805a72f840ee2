//! `deletebyname`: bulk-delete every person whose name shares a word with the
//! given keywords.

use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::{Command, CommandResult};
use crate::config::MESSAGE_PERSON_NOT_IN_ADDRESSBOOK;
use crate::data::{Person, PersonStore};
use crate::error::AddressBookError;

const MESSAGE_DELETE_PERSON_SUCCESS: &str = "Deleted Person(s): \n";

/// Deletes all persons whose names contain any of the keywords.
///
/// Matching is case-sensitive and per whole word: `John` matches
/// "John Smith" but neither "john smith" nor "Johnny Appleseed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteByNameCommand {
    keywords: HashSet<String>,
}

impl DeleteByNameCommand {
    pub fn new(keywords: HashSet<String>) -> Self {
        Self { keywords }
    }

    /// Returns a copy of the keywords in this command.
    pub fn keywords(&self) -> HashSet<String> {
        self.keywords.clone()
    }

    /// Persons in `store` whose name words intersect the keywords, in
    /// enumeration order.
    fn persons_with_name_containing_any_keyword<S: PersonStore + ?Sized>(
        &self,
        store: &S,
    ) -> Vec<Person> {
        store
            .all_persons()
            .into_iter()
            .filter(|person| {
                let matched =
                    name_matches_any_keyword(&person.name().words_in_name(), &self.keywords);
                debug!(name = %person.name(), matched, "checked person against keywords");
                matched
            })
            .collect()
    }
}

impl Command for DeleteByNameCommand {
    const COMMAND_WORD: &'static str = "deletebyname";
    const MESSAGE_USAGE: &'static str = "deletebyname: Deletes all persons whose names contain any of the specified keywords (case-sensitive)\n\
         Parameters: NAME\n\
         Example: deletebyname John";

    fn execute<S: PersonStore + ?Sized>(self, store: &mut S) -> CommandResult {
        let persons_found = self.persons_with_name_containing_any_keyword(&*store);
        debug!(matches = persons_found.len(), "collected persons to delete");

        // A failed removal drops whatever was accumulated so far. Persons
        // already removed stay removed.
        let mut deleted_persons_list = String::new();
        for target in &persons_found {
            if let Err(err) = store.remove_person(target) {
                match err {
                    AddressBookError::PersonNotFound { name } => {
                        warn!(%name, "person vanished before it could be deleted");
                    }
                    other => warn!(error = %other, "delete aborted"),
                }
                return CommandResult::failure(MESSAGE_PERSON_NOT_IN_ADDRESSBOOK);
            }
            info!(name = %target.name(), "deleted person");
            deleted_persons_list.push(' ');
            deleted_persons_list.push_str(&target.to_string());
            deleted_persons_list.push('\n');
        }

        CommandResult::new(format!(
            "{}{}",
            MESSAGE_DELETE_PERSON_SUCCESS, deleted_persons_list
        ))
    }
}

/// True when `name_words` and `keywords` share at least one word.
pub fn name_matches_any_keyword(name_words: &HashSet<String>, keywords: &HashSet<String>) -> bool {
    !name_words.is_disjoint(keywords)
}
