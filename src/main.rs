use addressbook::commands::{keyword_set, Cli, Commands};
use addressbook::config::LOG_ENV;
use addressbook::utils::config_paths::ConfigPaths;
use addressbook::utils::logger::{init_logger, resolve_log_level};
use addressbook::{AddressBookError, BookFile, Command, CommandResult, DeleteByNameCommand, ListCommand};
use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(code) => code,
        Err(err) => match err.downcast_ref::<AddressBookError>() {
            Some(book_err) => {
                let category = book_err.category();
                tracing::debug!(%category, "command failed: {}", book_err);
                eprintln!("{} {}", "error:".red().bold(), book_err.user_message());
                category.into()
            }
            None => {
                eprintln!("{} {:#}", "error:".red().bold(), err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let paths = ConfigPaths::new()?;

    // 优先级：--log-level > ADDRESSBOOK_LOG > config.json > 默认
    let resolved = resolve_log_level(
        cli.log_level.as_deref(),
        std::env::var_os(LOG_ENV).is_some(),
        paths.user_config.log_level.as_deref(),
    );
    init_logger(resolved.level.as_deref(), cli.log_file.clone())
        .context("failed to initialize logging")?;

    // 配置问题在日志就绪后再报告
    if let Some(warning) = &paths.load_warning {
        tracing::warn!("{}, using defaults", warning);
    }
    if let Some(warning) = &resolved.warning {
        tracing::warn!("{}", warning);
    }

    let book_file = BookFile::new(cli.book.clone().unwrap_or_else(|| paths.book_file()));
    let mut book = book_file.load()?;
    tracing::debug!(path = %book_file.path().display(), "using address book");

    let result = match cli.command {
        Commands::DeleteByName { keywords } => {
            let command = DeleteByNameCommand::new(keyword_set(&keywords));
            let result = command.execute(&mut book);
            // 中途失败也保留已删除的记录
            book_file.save(&book)?;
            result
        }
        Commands::List => ListCommand.execute(&mut book),
    };

    print_result(&result);
    Ok(if result.succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_result(result: &CommandResult) {
    if let Some(persons) = &result.relevant_persons {
        for (index, person) in persons.iter().enumerate() {
            println!("{}. {}", index + 1, person.as_text_hide_private());
        }
    }

    if !result.succeeded {
        println!("{}", result.feedback_to_user.yellow());
        return;
    }

    print!("{}", result.feedback_to_user);
    if !result.feedback_to_user.ends_with('\n') {
        println!();
    }
}
