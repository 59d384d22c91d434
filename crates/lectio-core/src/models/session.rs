//! In-memory session state: the plan id, progress, and day pointer triple.

use super::Progress;

/// The mutable state triple owned by the tracker for one session.
///
/// Loaded from persisted storage at startup, mutated only through tracker
/// operations, and written back after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Selected plan identifier, or None when no plan is chosen
    pub plan_id: Option<String>,

    /// Completed-day set for the selected plan
    pub progress: Progress,

    /// Current day pointer, the day whose reading is displayed
    pub current_day: u16,
}
