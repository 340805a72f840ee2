//! JSON book file used by the command-line host.
//!
//! The file is a plain array of person records. A missing file is an empty
//! book. Records are validated on load exactly like hand-built persons.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::data::{Address, AddressBook, Email, Name, Person, Phone, Tag};
use crate::error::{errors, AddressBookError, AddressBookResult};

/// On-disk shape of a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub phone_private: bool,
    pub email: String,
    #[serde(default)]
    pub email_private: bool,
    pub address: String,
    #[serde(default)]
    pub address_private: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = AddressBookError;

    fn try_from(record: PersonRecord) -> AddressBookResult<Self> {
        let tags = record
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<AddressBookResult<Vec<_>>>()?;
        Ok(Person::new(
            Name::new(record.name)?,
            Phone::new(record.phone, record.phone_private)?,
            Email::new(record.email, record.email_private)?,
            Address::new(record.address, record.address_private)?,
            tags,
        ))
    }
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().full_name().to_string(),
            phone: person.phone().value().to_string(),
            phone_private: person.phone().is_private(),
            email: person.email().value().to_string(),
            email_private: person.email().is_private(),
            address: person.address().value().to_string(),
            address_private: person.address().is_private(),
            tags: person.tags().iter().map(|t| t.name().to_string()).collect(),
        }
    }
}

/// A book file on disk.
#[derive(Debug, Clone)]
pub struct BookFile {
    path: PathBuf,
}

impl BookFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> AddressBookResult<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "book file missing, starting empty");
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| errors::storage_error("failed to read", self.display(), e))?;
        let records: Vec<PersonRecord> = serde_json::from_str(&content)
            .map_err(|e| errors::storage_error("invalid JSON", self.display(), e))?;

        let persons = records
            .into_iter()
            .map(Person::try_from)
            .collect::<AddressBookResult<Vec<_>>>()?;
        let book = AddressBook::with_persons(persons)?;
        info!(path = %self.path.display(), persons = book.len(), "loaded address book");
        Ok(book)
    }

    pub fn save(&self, book: &AddressBook) -> AddressBookResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| errors::storage_error("failed to create directory", self.display(), e))?;
            }
        }

        let records: Vec<PersonRecord> = book.iter().map(PersonRecord::from).collect();
        let content = serde_json::to_string_pretty(&records)
            .map_err(|e| errors::storage_error("failed to serialize", self.display(), e))?;
        fs::write(&self.path, content)
            .map_err(|e| errors::storage_error("failed to write", self.display(), e))?;
        debug!(path = %self.path.display(), persons = book.len(), "saved address book");
        Ok(())
    }

    fn display(&self) -> String {
        self.path.display().to_string()
    }
}
