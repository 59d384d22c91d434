//! The completed-day set for a single plan.

use std::collections::BTreeSet;

use crate::calendar::PLAN_DAYS;

/// The set of day indices the user has marked complete.
///
/// Membership is restricted to `[1, PLAN_DAYS]`; out-of-range indices are
/// silently ignored on insertion. Marking an already-present day or
/// unmarking an absent one is a no-op, which makes toggling idempotent
/// over a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    completed: BTreeSet<u16>,
}

impl Progress {
    /// Creates an empty completed-day set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw day indices, dropping out-of-range entries.
    pub fn from_days<I: IntoIterator<Item = u16>>(days: I) -> Self {
        Self {
            completed: days
                .into_iter()
                .filter(|d| (1..=PLAN_DAYS).contains(d))
                .collect(),
        }
    }

    /// Marks a day complete. Returns false for out-of-range indices.
    pub fn mark(&mut self, day: u16) -> bool {
        if !(1..=PLAN_DAYS).contains(&day) {
            return false;
        }
        self.completed.insert(day);
        true
    }

    /// Unmarks a day. Absent days are a no-op.
    pub fn unmark(&mut self, day: u16) {
        self.completed.remove(&day);
    }

    /// Toggles a day's membership, returning whether it is now complete.
    pub fn toggle(&mut self, day: u16) -> bool {
        if self.completed.contains(&day) {
            self.completed.remove(&day);
            false
        } else {
            self.mark(day)
        }
    }

    /// Whether the given day is marked complete.
    pub fn contains(&self, day: u16) -> bool {
        self.completed.contains(&day)
    }

    /// Number of completed days.
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether no days are complete.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// The completed day indices in ascending order, for serialization.
    pub fn days(&self) -> Vec<u16> {
        self.completed.iter().copied().collect()
    }
}
