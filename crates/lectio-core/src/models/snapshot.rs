//! View-facing snapshot types consumed by the renderer.

use super::{Reading, Stats};

/// Everything the renderer needs to paint the day panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySnapshot {
    /// Display name of the selected plan
    pub plan_name: String,

    /// The day index being displayed
    pub day: u16,

    /// Short formatted date label for the day
    pub date_label: String,

    /// The day's reading, or None when the index is beyond plan content
    pub reading: Option<Reading>,

    /// Whether the day is marked complete
    pub completed: bool,
}

/// Aggregate statistics together with the plan they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    /// Display name of the selected plan
    pub plan_name: String,

    /// The derived statistics
    pub stats: Stats,
}

/// One row of the 365-row calendar table.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarRow {
    /// The day index of the row
    pub day: u16,

    /// Whether the day is marked complete
    pub completed: bool,

    /// Short formatted date label for the day
    pub date_label: String,

    /// The day's reading, or None when the index is beyond plan content
    pub reading: Option<Reading>,

    /// Whether the row is today (only set when today falls in the plan year)
    pub is_today: bool,
}

/// A selectable plan as listed from the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanChoice {
    /// Identifier used to select the plan
    pub id: String,

    /// Display name of the plan
    pub name: String,
}
