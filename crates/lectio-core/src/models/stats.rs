//! Completion statistics derived from the completed-day set.

use super::Progress;
use crate::calendar::PLAN_DAYS;

/// Aggregate completion statistics for a plan.
///
/// All fields are recomputed in full from `(completed set, current day)`
/// on every mutation; the domain is fixed at 365 days, so incremental
/// maintenance is not worth its complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Total number of completed days
    pub completed_count: usize,

    /// Consecutive completed days ending at (and including) the current day
    pub current_streak: u16,

    /// Longest run of consecutive completed days anywhere in the plan
    pub longest_streak: u16,

    /// Completion percentage of the 365-day span, rounded for display
    pub percent: u8,
}

impl Stats {
    /// Computes statistics for the given progress and current day pointer.
    ///
    /// The current streak looks only backward from the current day; a
    /// completed day in the future does not extend it.
    pub fn compute(progress: &Progress, current_day: u16) -> Self {
        let current_streak = (1..=current_day)
            .rev()
            .take_while(|d| progress.contains(*d))
            .count() as u16;

        let mut longest_streak: u16 = 0;
        let mut run: u16 = 0;
        for day in 1..=PLAN_DAYS {
            if progress.contains(day) {
                run += 1;
                longest_streak = longest_streak.max(run);
            } else {
                run = 0;
            }
        }

        let completed_count = progress.len();
        let percent = ((completed_count as f64 / f64::from(PLAN_DAYS)) * 100.0).round() as u8;

        Self {
            completed_count,
            current_streak,
            longest_streak,
            percent,
        }
    }
}
