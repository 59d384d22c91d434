use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GoToDateArgs, SelectPlanArgs, ToggleDayArgs};

/// Main command-line interface for the Lectio reading tracker
///
/// Lectio follows a fixed 365-day reading plan: it shows each day's
/// assignment, lets you mark days complete, and keeps progress in a local
/// database. Plans are loaded from an external JSON library file.
#[derive(Parser)]
#[command(version, about, name = "lectio")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lectio/lectio.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the plan library JSON file. Defaults to
    /// $XDG_CONFIG_HOME/lectio/plans.json
    #[arg(long, global = true)]
    pub plans_file: Option<PathBuf>,

    /// Reference year used to map plan days to dates. Defaults to the
    /// current year
    #[arg(long, global = true)]
    pub year: Option<i16>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Lectio CLI
///
/// Running without a command shows the current day's reading.
#[derive(Subcommand)]
pub enum Commands {
    /// List the available reading plans
    #[command(alias = "p")]
    Plans,
    /// Select the active reading plan
    Select(SelectPlanArgs),
    /// Show the current day's reading
    #[command(alias = "s")]
    Show,
    /// Move to the next day
    #[command(alias = "n")]
    Next,
    /// Move to the previous day
    Prev,
    /// Jump to today's reading
    Today,
    /// Jump to a specific date
    #[command(alias = "g")]
    Goto(GoToDateArgs),
    /// Toggle completion for a day
    #[command(alias = "t")]
    Toggle(ToggleDayArgs),
    /// Show completion statistics
    Stats,
    /// Print the full-year calendar table
    #[command(alias = "cal")]
    Calendar,
}
