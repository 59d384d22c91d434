//! Data models for plans, progress, and derived views.
//!
//! This module contains the core domain models of the reading tracker.
//! Display implementations live in [`crate::display::models`] to keep data
//! structures separate from presentation logic: the same snapshot can be
//! painted as a day panel, a stats block, or a calendar row without the
//! models knowing about markdown.
//!
//! The split mirrors the rest of the crate:
//!
//! - [`plan`]/[`library`]: immutable external plan content
//! - [`progress`]: the mutable completed-day set
//! - [`stats`]: pure derivations over the completed-day set
//! - [`session`]: the state triple owned by the tracker
//! - [`snapshot`]: view-facing outputs consumed by the renderer

pub mod library;
pub mod plan;
pub mod progress;
pub mod session;
pub mod snapshot;
pub mod stats;


// Re-export all public types at the models level
pub use library::PlanLibrary;
pub use plan::{Plan, Reading, Readings, CATEGORIES, WEEKDAY_NAMES};
pub use progress::Progress;
pub use session::Session;
pub use snapshot::{CalendarRow, DaySnapshot, PlanChoice, StatsReport};
pub use stats::Stats;
