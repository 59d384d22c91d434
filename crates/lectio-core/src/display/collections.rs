//! Collection wrapper types with Display implementations.

use std::fmt;

use super::models::PLAN_COMPLETED;
use crate::models::{CalendarRow, PlanChoice};

/// Wrapper for displaying the list of selectable plans.
///
/// Formats the plan library as a markdown list of identifiers and names,
/// with a friendly notice when the library is empty.
pub struct PlanChoices(pub Vec<PlanChoice>);

impl fmt::Display for PlanChoices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Reading Plans")?;
        writeln!(f)?;

        if self.0.is_empty() {
            writeln!(f, "No reading plans available.")?;
            return Ok(());
        }

        for choice in &self.0 {
            write!(f, "{choice}")?;
        }
        Ok(())
    }
}

/// Wrapper for displaying the full 365-row calendar table.
///
/// Each row carries the completion flag, the formatted date, the reading
/// text, and a marker on today's row when today falls in the plan year.
pub struct CalendarView(pub Vec<CalendarRow>);

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Day | Done | Date | Reading |")?;
        writeln!(f, "|----:|:----:|------|---------|")?;

        for row in &self.0 {
            let reading = match &row.reading {
                Some(reading) => reading.to_string(),
                None => PLAN_COMPLETED.to_string(),
            };
            let marker = if row.is_today { " (today)" } else { "" };
            writeln!(
                f,
                "| {} | {} | {}{} | {} |",
                row.day,
                if row.completed { "[x]" } else { "[ ]" },
                row.date_label,
                marker,
                reading
            )?;
        }
        Ok(())
    }
}
