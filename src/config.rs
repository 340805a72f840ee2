pub const APP_DIRECTORY: &str = ".addressbook";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const BOOK_FILE_NAME: &str = "addressbook.json";

pub const LOG_ENV: &str = "ADDRESSBOOK_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn,addressbook=info";

pub const MESSAGE_PERSON_NOT_IN_ADDRESSBOOK: &str = "Person could not be found in address book";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_PERSONS_LISTED_OVERVIEW: &str = "persons listed!";
