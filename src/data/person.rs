//! Person records and their validated fields.
//!
//! Every field is validated on construction, so a `Person` that exists is
//! always well formed. Contact fields can be marked private; private values
//! are still stored but rendered with a `(private)` marker, or omitted from
//! the public text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::error::{errors, AddressBookResult};

const DETAIL_IS_PRIVATE: &str = "(private) ";

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}]+( +[\p{Alphabetic}\p{N}]+)*$").expect("valid regex"));
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid regex"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid regex"));
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}]+$").expect("valid regex"));

/// A person's display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    full_name: String,
}

impl Name {
    pub const CONSTRAINT: &'static str =
        "person names should be spaces or alphanumeric characters";

    pub fn new(name: impl Into<String>) -> AddressBookResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if !NAME_PATTERN.is_match(trimmed) {
            return Err(errors::illegal_value("name", name, Self::CONSTRAINT));
        }
        Ok(Self {
            full_name: trimmed.to_string(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Whitespace-delimited words making up the name.
    pub fn words_in_name(&self) -> HashSet<String> {
        self.full_name
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
    is_private: bool,
}

impl Phone {
    pub const CONSTRAINT: &'static str = "person phone numbers should only contain numbers";

    pub fn new(value: impl Into<String>, is_private: bool) -> AddressBookResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if !PHONE_PATTERN.is_match(trimmed) {
            return Err(errors::illegal_value("phone", value, Self::CONSTRAINT));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
    is_private: bool,
}

impl Email {
    pub const CONSTRAINT: &'static str =
        "person emails should be 2 alphanumeric/period strings separated by '@'";

    pub fn new(value: impl Into<String>, is_private: bool) -> AddressBookResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(errors::illegal_value("email", value, Self::CONSTRAINT));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
    is_private: bool,
}

impl Address {
    pub const CONSTRAINT: &'static str = "person addresses can be in any format";

    pub fn new(value: impl Into<String>, is_private: bool) -> AddressBookResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(errors::illegal_value("address", value, Self::CONSTRAINT));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub const CONSTRAINT: &'static str = "tags names should be alphanumeric";

    pub fn new(name: impl Into<String>) -> AddressBookResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if !TAG_PATTERN.is_match(trimmed) {
            return Err(errors::illegal_value("tag", name, Self::CONSTRAINT));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

/// A contact in the address book.
///
/// Two persons are the same record when every field is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// One-line description with every field, private ones marked.
    pub fn as_text_show_all(&self) -> String {
        let mut text = format!("{} Phone: ", self.name);
        push_detail(&mut text, self.phone.value(), self.phone.is_private());
        text.push_str(" Email: ");
        push_detail(&mut text, self.email.value(), self.email.is_private());
        text.push_str(" Address: ");
        push_detail(&mut text, self.address.value(), self.address.is_private());
        text.push_str(" Tags: ");
        for tag in &self.tags {
            text.push_str(&tag.to_string());
        }
        text
    }

    /// One-line description leaving out private fields.
    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.to_string();
        if !self.phone.is_private() {
            text.push_str(" Phone: ");
            text.push_str(self.phone.value());
        }
        if !self.email.is_private() {
            text.push_str(" Email: ");
            text.push_str(self.email.value());
        }
        if !self.address.is_private() {
            text.push_str(" Address: ");
            text.push_str(self.address.value());
        }
        text.push_str(" Tags: ");
        for tag in &self.tags {
            text.push_str(&tag.to_string());
        }
        text
    }
}

fn push_detail(text: &mut String, value: &str, is_private: bool) {
    if is_private {
        text.push_str(DETAIL_IS_PRIVATE);
    }
    text.push_str(value);
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}
