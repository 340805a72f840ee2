use addressbook::commands::delete_by_name::name_matches_any_keyword;
use addressbook::{
    Address, AddressBook, Command, DeleteByNameCommand, Email, Name, Person, PersonStore, Phone,
};
use proptest::prelude::*;
use std::collections::HashSet;

const VOCABULARY: &[&str] = &["Ann", "ann", "Bob", "Bobby", "Cy", "Dee", "Lee", "Li"];

fn word() -> impl Strategy<Value = String> {
    proptest::sample::select(VOCABULARY).prop_map(str::to_string)
}

fn name_words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(word(), 1..4)
}

fn book_from(names: &[Vec<String>]) -> AddressBook {
    // Index-based phone numbers keep every record distinct.
    let persons = names.iter().enumerate().map(|(i, words)| {
        Person::new(
            Name::new(words.join(" ")).unwrap(),
            Phone::new(i.to_string(), false).unwrap(),
            Email::new("p@example.com", false).unwrap(),
            Address::new("Somewhere", false).unwrap(),
            Vec::new(),
        )
    });
    AddressBook::with_persons(persons).unwrap()
}

proptest! {
    #[test]
    fn removes_exactly_the_matching_persons(
        names in proptest::collection::vec(name_words(), 0..12),
        keywords in proptest::collection::hash_set(word(), 0..4),
    ) {
        let mut book = book_from(&names);
        let before = book.all_persons();

        let matches_keyword = |p: &Person| {
            p.name().full_name().split(' ').any(|w| keywords.contains(w))
        };
        let expected_removed: Vec<Person> = before.iter().filter(|p| matches_keyword(*p)).cloned().collect();
        let expected_kept: Vec<Person> = before.iter().filter(|p| !matches_keyword(*p)).cloned().collect();

        let result = DeleteByNameCommand::new(keywords.clone()).execute(&mut book);

        prop_assert_eq!(book.all_persons(), expected_kept);
        prop_assert_eq!(result.feedback_to_user.lines().count(), expected_removed.len() + 1);
        for person in &expected_removed {
            let line = format!(" {}", person);
            prop_assert!(result.feedback_to_user.lines().any(|l| l == line));
        }
    }

    #[test]
    fn predicate_is_pure(
        words in proptest::collection::hash_set(word(), 0..5),
        keywords in proptest::collection::hash_set(word(), 0..5),
    ) {
        let first = name_matches_any_keyword(&words, &keywords);
        let second = name_matches_any_keyword(&words, &keywords);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, words.intersection(&keywords).next().is_some());
    }

    #[test]
    fn empty_keywords_never_delete(names in proptest::collection::vec(name_words(), 0..12)) {
        let mut book = book_from(&names);
        let before = book.clone();
        DeleteByNameCommand::new(HashSet::new()).execute(&mut book);
        prop_assert_eq!(book, before);
    }
}
