use clap::error::ErrorKind;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use memo::cli::args::{Action, Cli};
use memo::cli::commands;
use memo::config::{Config, Paths};
use memo::error::MemoError;
use memo::features::interactive::SkimSelector;
use memo::storage::{with_store, Store, StoreLocation};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("MEMO_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<(), MemoError> {
    let (cli, action) = match Cli::try_parse_action(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) if e.kind() == ErrorKind::UnknownArgument => {
            // Unrecognized input is a no-op, never an error
            init_logging(false);
            tracing::debug!(error = %e, "ignoring unrecognized argument");
            return Ok(());
        }
        Err(e) => e.exit(),
    };
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    if action == Action::Unrecognized {
        tracing::debug!(args = ?cli.extra, "ignoring unrecognized argument");
        return Ok(());
    }

    let paths = Paths::default();
    let config = Config::load_from_path(&paths.config_file)?;
    config.color.apply();
    let format = cli.output.unwrap_or(config.default_output);

    let db_path = config.database_path(cli.db.as_deref(), &paths);
    if db_path == paths.database {
        paths.ensure_dirs()?;
    }

    let output = with_store(StoreLocation::from_path(&db_path), |store| {
        tracing::debug!(location = %store.location(), ?action, "running command");
        match action {
            Action::Add => add_from_stdin(store),
            Action::List => commands::list(store, format),
            Action::Read => commands::read(store, &mut SkimSelector, format),
            Action::Delete => commands::delete(store, &mut SkimSelector, format),
            Action::Unrecognized => Ok(String::new()),
        }
    })?;

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Add standard input as a memo; blank input is reported, not fatal.
fn add_from_stdin(store: &Store) -> Result<String, MemoError> {
    let content = commands::read_content(std::io::stdin().lock())?;
    match commands::add(store, &content) {
        Err(MemoError::EmptyContent) => {
            eprintln!("{}", "Memo content is empty.".yellow());
            Ok(String::new())
        }
        result => result,
    }
}
