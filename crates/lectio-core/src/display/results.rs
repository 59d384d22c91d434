//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Stats;

/// Wrapper type for displaying the outcome of a completion toggle.
///
/// Shows which day changed, its new completion state, and the recomputed
/// aggregate statistics, so the caller sees the effect of the mutation
/// without a second query.
pub struct ToggleResult {
    /// The day that was toggled
    pub day: u16,

    /// The day's completion state after the toggle
    pub completed: bool,

    /// Statistics recomputed after the toggle
    pub stats: Stats,
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            writeln!(f, "Marked day {} complete.", self.day)?;
        } else {
            writeln!(f, "Cleared day {}.", self.day)?;
        }
        writeln!(f)?;
        writeln!(f, "- Days completed: {}", self.stats.completed_count)?;
        writeln!(f, "- Current streak: {}", self.stats.current_streak)?;
        writeln!(f, "- Longest streak: {}", self.stats.longest_streak)?;
        writeln!(f, "- {}% Complete", self.stats.percent)
    }
}
