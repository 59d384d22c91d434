//! Core library for the Lectio reading tracker.
//!
//! This crate provides the business logic for following a fixed 365-day
//! reading plan: calendar math, the persisted progress store, day-pointer
//! navigation, and completion statistics.
//!
//! # Architecture
//!
//! The [`Tracker`] is the single owner of session state (selected plan,
//! completed-day set, current day pointer). Handlers apply one transition
//! at a time, persist write-through to a SQLite key-value store, and
//! return markdown-formatting snapshot types for display. Calendar math
//! and statistics are pure functions over that state.
//!
//! # Quick Start
//!
//! ```rust
//! use lectio_core::{
//!     models::{Plan, PlanLibrary, Readings},
//!     params::SelectPlan,
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut library = PlanLibrary::new();
//! library.insert(
//!     "genesis",
//!     Plan {
//!         name: "Genesis in a Week".to_string(),
//!         readings: Readings::Days(vec!["Genesis 1-7".to_string()]),
//!     },
//! );
//!
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("reading.db"))
//!     .with_library(library)
//!     .build()
//!     .await?;
//!
//! let snapshot = tracker
//!     .select_plan(&SelectPlan { id: "genesis".to_string() })
//!     .await?;
//! println!("{}", snapshot);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use calendar::PLAN_DAYS;
pub use db::Database;
pub use display::{CalendarView, OperationStatus, PlanChoices, ToggleResult};
pub use error::{Result, TrackerError};
pub use models::{
    DaySnapshot, Plan, PlanChoice, PlanLibrary, Progress, Reading, Readings, Session, Stats,
    StatsReport,
};
pub use params::{GoToDate, SelectPlan, ToggleDay};
pub use tracker::{Tracker, TrackerBuilder};
