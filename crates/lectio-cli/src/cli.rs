//! Command handlers and CLI argument wrappers.
//!
//! Implements the parameter wrapper pattern: each command defines a clap
//! argument struct here and converts it into the core's framework-free
//! parameter type via `From`, keeping clap concerns out of the core. The
//! [`Cli`] struct dispatches commands against the tracker and renders the
//! resulting markdown.

use anyhow::Result;
use clap::Args;
use lectio_core::{
    DaySnapshot, GoToDate, OperationStatus, SelectPlan, ToggleDay, Tracker,
};

use crate::{args::Commands, renderer::TerminalRenderer};

/// Select the active reading plan
#[derive(Args)]
pub struct SelectPlanArgs {
    /// Identifier of the plan, as listed by `lectio plans`
    #[arg(help = "Identifier of the plan to activate, as listed by `lectio plans`")]
    pub id: String,
}

impl From<SelectPlanArgs> for SelectPlan {
    fn from(val: SelectPlanArgs) -> Self {
        SelectPlan { id: val.id }
    }
}

/// Jump to a specific date
#[derive(Args)]
pub struct GoToDateArgs {
    /// Target date in YYYY-MM-DD form
    #[arg(help = "Target date in YYYY-MM-DD form")]
    pub date: String,
}

impl From<GoToDateArgs> for GoToDate {
    fn from(val: GoToDateArgs) -> Self {
        GoToDate { date: val.date }
    }
}

/// Toggle completion for a day
#[derive(Args)]
pub struct ToggleDayArgs {
    /// Day index to toggle; defaults to the current day
    #[arg(help = "Day index to toggle (1-365); defaults to the current day")]
    pub day: Option<u16>,
}

impl From<ToggleDayArgs> for ToggleDay {
    fn from(val: ToggleDayArgs) -> Self {
        ToggleDay { day: val.day }
    }
}

/// Command dispatcher pairing the tracker with a terminal renderer.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Creates a new CLI handler.
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Dispatches a parsed command. No command defaults to showing the
    /// current day's reading.
    pub async fn handle_command(&self, command: Option<Commands>) -> Result<()> {
        match command {
            None | Some(Commands::Show) => {
                let snapshot = self.tracker.current_reading().await?;
                self.render_snapshot(snapshot);
            }
            Some(Commands::Plans) => {
                self.renderer.render(&self.tracker.plan_choices().to_string());
            }
            Some(Commands::Select(args)) => {
                let snapshot = self.tracker.select_plan(&args.into()).await?;
                self.renderer.render(&snapshot.to_string());
            }
            Some(Commands::Next) => {
                let snapshot = self.tracker.next_day().await?;
                self.render_snapshot(snapshot);
            }
            Some(Commands::Prev) => {
                let snapshot = self.tracker.previous_day().await?;
                self.render_snapshot(snapshot);
            }
            Some(Commands::Today) => {
                let snapshot = self.tracker.go_to_today().await?;
                self.render_snapshot(snapshot);
            }
            Some(Commands::Goto(args)) => {
                let snapshot = self.tracker.go_to_date(&args.into()).await?;
                self.render_snapshot(snapshot);
            }
            Some(Commands::Toggle(args)) => match self.tracker.toggle_day(&args.into()).await? {
                Some(outcome) => self.renderer.render(&outcome.to_string()),
                None => self.render_no_plan(),
            },
            Some(Commands::Stats) => match self.tracker.stats().await? {
                Some(report) => self.renderer.render(&report.to_string()),
                None => self.render_no_plan(),
            },
            Some(Commands::Calendar) => match self.tracker.calendar().await? {
                Some(view) => self.renderer.render(&view.to_string()),
                None => self.render_no_plan(),
            },
        }
        Ok(())
    }

    fn render_snapshot(&self, snapshot: Option<DaySnapshot>) {
        match snapshot {
            Some(snapshot) => self.renderer.render(&snapshot.to_string()),
            None => self.render_no_plan(),
        }
    }

    fn render_no_plan(&self) {
        let notice = OperationStatus::failure(
            "No plan selected. Run `lectio plans` to list plans, then `lectio select <id>`.",
        );
        self.renderer.render(&notice.to_string());
    }
}
