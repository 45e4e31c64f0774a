use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "memo")]
#[command(about = "A tiny note-taking CLI backed by a local SQLite database")]
#[command(long_about = "memo - jot down notes from the terminal

Memos are stored in a local SQLite database. The first line of each memo
is its label, shown wherever memos are listed.

QUICK START:
  echo \"Buy milk\" | memo     Add a memo from standard input
  memo                       Type a memo, finish with Ctrl-D
  memo -l                    List memo labels
  memo -r                    Pick a memo and print it
  memo -d                    Pick a memo and delete it

The database defaults to ~/.memo/memo.db. Use --db or MEMO_DB to point
elsewhere, or --db :memory: for a throwaway store.

Only the first of -l, -r and -d counts; anything after it is ignored.
An unrecognized first argument does nothing.")]
#[command(version, args_override_self = true)]
pub struct Cli {
    /// List the label (first line) of every memo
    #[arg(short, long)]
    pub list: bool,

    /// Interactively choose a memo and print its full content
    #[arg(short, long)]
    pub read: bool,

    /// Interactively choose a memo and delete it
    #[arg(short, long)]
    pub delete: bool,

    /// Database file to use (`:memory:` for an in-memory store)
    #[arg(long, env = "MEMO_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Output format for listings and memo content
    ///
    /// Defaults to the `default_output` setting in ~/.memo/config.yaml.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable debug logging (overridden by MEMO_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Arguments memo does not recognize
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// The operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read a memo from standard input and store it.
    Add,
    /// Print every label.
    List,
    /// Pick a memo and print it.
    Read,
    /// Pick a memo and delete it.
    Delete,
    /// The first argument was not recognized; do nothing.
    Unrecognized,
}

impl Cli {
    /// Parse `args` and work out which action they request.
    ///
    /// The earliest of `-l`, `-r` and `-d` wins. Unknown arguments before it
    /// turn the invocation into [`Action::Unrecognized`]; unknown arguments
    /// after it are ignored.
    ///
    /// # Errors
    ///
    /// Returns the clap error for `--help`, `--version`, and malformed options.
    pub fn try_parse_action<I, T>(args: I) -> Result<(Self, Action), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let cli = Self::from_arg_matches(&matches)?;
        Ok((cli, action_from(&matches)))
    }
}

fn action_from(matches: &ArgMatches) -> Action {
    let chosen = [
        ("list", Action::List),
        ("read", Action::Read),
        ("delete", Action::Delete),
    ]
    .into_iter()
    .filter(|(id, _)| matches.get_flag(id))
    .filter_map(|(id, action)| matches.index_of(id).map(|index| (index, action)))
    .min_by_key(|(index, _)| *index);

    match (chosen, matches.index_of("extra")) {
        (Some((index, action)), Some(extra)) if index < extra => action,
        (Some((_, action)), None) => action,
        (None, None) => Action::Add,
        _ => Action::Unrecognized,
    }
}
