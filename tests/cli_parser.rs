use addressbook::commands::{keyword_set, Cli, Commands};
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    let argv: Vec<String> = std::iter::once("addressbook")
        .chain(args.iter().copied())
        .map(|s| s.to_string())
        .collect();
    Cli::try_parse_args_from(argv).expect("expected command parsing to succeed")
}

#[test]
fn parses_deletebyname_with_several_keywords() {
    match parse(&["deletebyname", "John", "Jane"]).command {
        Commands::DeleteByName { keywords } => {
            assert_eq!(keywords, vec!["John".to_string(), "Jane".to_string()]);
        }
        other => panic!("expected deletebyname command, got {other:?}"),
    }
}

#[test]
fn deletebyname_requires_at_least_one_keyword() {
    let err = Cli::try_parse_args_from(["addressbook", "deletebyname"])
        .expect_err("missing keywords should be rejected");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn global_options_are_accepted_after_subcommand() {
    let cli = parse(&["list", "--book", "/tmp/book.json", "--log-level", "debug"]);
    assert_eq!(cli.command, Commands::List);
    assert_eq!(cli.book, Some(PathBuf::from("/tmp/book.json")));
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
}

#[test]
fn keyword_set_collapses_repeats() {
    let set = keyword_set(&["John".to_string(), "John".to_string(), "Jane".to_string()]);
    assert_eq!(set.len(), 2);
    assert!(set.contains("John"));
    assert!(set.contains("Jane"));
}

#[test]
fn unknown_command_is_rejected() {
    assert!(Cli::try_parse_args_from(["addressbook", "delete", "1"]).is_err());
}
