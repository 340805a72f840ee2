//! The in-memory address book.

use tracing::debug;

use super::person::Person;
use crate::error::{errors, AddressBookResult};

/// Storage contract the commands operate against.
///
/// `all_persons` returns an owned snapshot in enumeration order, so callers
/// can mutate the store while walking the result.
pub trait PersonStore {
    fn all_persons(&self) -> Vec<Person>;

    fn contains_person(&self, person: &Person) -> bool;

    /// Remove `person` by identity. Fails with `PersonNotFound` when absent.
    fn remove_person(&mut self, person: &Person) -> AddressBookResult<()>;
}

/// Ordered list of unique persons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from `persons`, rejecting duplicates.
    pub fn with_persons(persons: impl IntoIterator<Item = Person>) -> AddressBookResult<Self> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    pub fn add_person(&mut self, person: Person) -> AddressBookResult<()> {
        if self.persons.contains(&person) {
            return Err(errors::duplicate_person(person.name().full_name()));
        }
        debug!(name = %person.name(), "adding person");
        self.persons.push(person);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl PersonStore for AddressBook {
    fn all_persons(&self) -> Vec<Person> {
        self.persons.clone()
    }

    fn contains_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    fn remove_person(&mut self, person: &Person) -> AddressBookResult<()> {
        match self.persons.iter().position(|p| p == person) {
            Some(index) => {
                self.persons.remove(index);
                Ok(())
            }
            None => Err(errors::person_not_found(person.name().full_name())),
        }
    }
}
