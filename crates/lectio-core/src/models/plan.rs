//! Plan model definition and reading lookup.

use serde::{Deserialize, Serialize};

/// Weekday names for the week-structured plan shape, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Reading categories for the week-structured plan shape, one per weekday.
pub const CATEGORIES: [&str; 7] = [
    "Epistles",
    "Law",
    "History",
    "Psalms",
    "Poetry",
    "Prophecy",
    "Gospels",
];

/// A named reading plan with its assignment sequence.
///
/// Plan content is immutable, supplied externally as part of the plan
/// library. Two shapes exist: a flat day-indexed sequence and a
/// week-structured sequence of 7 categorized entries per week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Display name of the plan
    pub name: String,

    /// The reading assignment sequence
    #[serde(flatten)]
    pub readings: Readings,
}

/// The assignment sequence of a plan, in either of its two shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Readings {
    /// Flat day-indexed sequence, one entry per calendar day
    Days(Vec<String>),

    /// Week-structured sequence, 7 categorized entries per week
    Weeks(Vec<[String; 7]>),
}

/// A single day's reading assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// The passage text for the day
    pub passage: String,

    /// Weekday name, present only for week-structured plans
    pub weekday: Option<&'static str>,

    /// Reading category, present only for week-structured plans
    pub category: Option<&'static str>,
}

impl Plan {
    /// Looks up the reading for a 1-based day index.
    ///
    /// Returns `None` for day 0 and for indices beyond the plan content;
    /// callers render the absence as a "plan completed" message rather
    /// than treating it as an error.
    pub fn reading_for_day(&self, day: u16) -> Option<Reading> {
        if day == 0 {
            return None;
        }
        match &self.readings {
            Readings::Days(days) => {
                days.get(usize::from(day) - 1).map(|passage| Reading {
                    passage: passage.clone(),
                    weekday: None,
                    category: None,
                })
            }
            Readings::Weeks(weeks) => {
                let week = usize::from(day - 1) / 7;
                let weekday = usize::from(day - 1) % 7;
                weeks.get(week).map(|entries| Reading {
                    passage: entries[weekday].clone(),
                    weekday: Some(WEEKDAY_NAMES[weekday]),
                    category: Some(CATEGORIES[weekday]),
                })
            }
        }
    }
}
