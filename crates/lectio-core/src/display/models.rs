//! Display implementations for snapshot models.
//!
//! These render the view-facing snapshots as markdown: the day panel, the
//! stats block, and single plan choices. Separated from the model
//! definitions so data structures stay free of presentation concerns.

use std::fmt;

use crate::models::{DaySnapshot, PlanChoice, Reading, StatsReport};

/// Message shown when the day pointer is beyond the plan content.
pub(crate) const PLAN_COMPLETED: &str = "You have completed the entire plan! 🎉";

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.weekday, self.category) {
            (Some(weekday), Some(category)) => {
                write!(f, "**{weekday} ({category}):** {}", self.passage)
            }
            _ => write!(f, "{}", self.passage),
        }
    }
}

impl fmt::Display for DaySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.plan_name)?;
        writeln!(f)?;
        writeln!(f, "## Day {} - {}", self.day, self.date_label)?;
        writeln!(f)?;

        match &self.reading {
            Some(reading) => writeln!(f, "{reading}")?,
            None => writeln!(f, "{PLAN_COMPLETED}")?,
        }

        writeln!(f)?;
        writeln!(
            f,
            "- Completed: {}",
            if self.completed { "[x]" } else { "[ ]" }
        )
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Progress - {}", self.plan_name)?;
        writeln!(f)?;
        writeln!(f, "- Days completed: {}", self.stats.completed_count)?;
        writeln!(f, "- Current streak: {}", self.stats.current_streak)?;
        writeln!(f, "- Longest streak: {}", self.stats.longest_streak)?;
        writeln!(f)?;
        writeln!(f, "{}% Complete", self.stats.percent)
    }
}

impl fmt::Display for PlanChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}**: {}", self.id, self.name)
    }
}
