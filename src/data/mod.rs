//! Address book data model

pub mod address_book;
pub mod person;

pub use address_book::{AddressBook, PersonStore};
pub use person::{Address, Email, Name, Person, Phone, Tag};
