//! These structs provide the CLI interface for the expense-tracker CLI.

use crate::model::Amount;
use crate::store::DEFAULT_FILE;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// The names of the subcommands, in the order they are listed to the user.
pub const COMMANDS: [&str; 4] = ["add", "list", "delete", "summary"];

/// expense-tracker: Record, list and summarize personal expenses.
///
/// Expenses are kept in a single JSON file, `expenses.json` in the current directory unless
/// --file says otherwise.
#[derive(Debug, Parser, Clone)]
#[command(name = "expense-tracker", version)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn new(common: Common, command: Option<Command>) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    /// The requested subcommand. `None` when the program was run without one.
    pub fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Record a new expense dated now.
    Add(AddArgs),
    /// Print all expenses as a table, in the order they were added.
    List(ListArgs),
    /// Delete the expense with the given ID.
    Delete(DeleteArgs),
    /// Print the total of all expenses, or of one month of the current year.
    Summary(SummaryArgs),
    /// Anything else the user typed in place of a subcommand.
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// Logs are written to stderr. This can be overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// The JSON file where expenses are stored.
    #[arg(long, global = true, default_value_t = DisplayPath::from(PathBuf::from(DEFAULT_FILE)))]
    file: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, file: PathBuf) -> Self {
        Self {
            log_level,
            file: file.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn file(&self) -> &DisplayPath {
        &self.file
    }
}

/// Args for the `add` command.
///
/// Both flags are optional as far as the parser is concerned so that a missing value is reported
/// the same way as an empty or non-positive one.
#[derive(Debug, Parser, Clone, Default)]
pub struct AddArgs {
    /// What the money was spent on.
    #[arg(long)]
    description: Option<String>,

    /// How much was spent, e.g. 12.50 or $1,200.00. Must be greater than zero.
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<Amount>,
}

impl AddArgs {
    pub fn new(description: Option<&str>, amount: Option<Amount>) -> Self {
        Self {
            description: description.map(str::to_string),
            amount,
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }
}

/// Args for the `list` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct ListArgs {}

/// Args for the `delete` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct DeleteArgs {
    /// The ID of the expense to delete, as shown by `list`.
    #[arg(long, allow_hyphen_values = true)]
    id: Option<i64>,
}

impl DeleteArgs {
    pub fn new(id: Option<i64>) -> Self {
        Self { id }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Args for the `summary` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct SummaryArgs {
    /// Only total the expenses from this month (1-12) of the current year.
    #[arg(long, allow_hyphen_values = true)]
    month: Option<i64>,
}

impl SummaryArgs {
    pub fn new(month: Option<i64>) -> Self {
        Self { month }
    }

    pub fn month(&self) -> Option<i64> {
        self.month
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
