//! Parameter structures for tracker operations.
//!
//! Shared parameter structures usable across interfaces (CLI today,
//! anything else tomorrow) without framework-specific derives. Interface
//! layers define their own wrapper types with clap attributes and convert
//! into these via `From`, keeping the core free of CLI concerns.

use serde::{Deserialize, Serialize};

/// Parameters for selecting the active reading plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectPlan {
    /// Identifier of the plan to activate
    pub id: String,
}

/// Parameters for jumping the day pointer to a specific date.
///
/// The date is carried as an ISO `YYYY-MM-DD` string and parsed by the
/// tracker, so interface layers stay free of date dependencies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoToDate {
    /// The target date in `YYYY-MM-DD` form
    pub date: String,
}

/// Parameters for toggling a day's completion state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleDay {
    /// Day index to toggle; None toggles the current day
    pub day: Option<u16>,
}
