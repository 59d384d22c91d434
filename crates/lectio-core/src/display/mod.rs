//! Display formatting for tracker output.
//!
//! All tracker output is markdown produced through `Display` impls, so the
//! same snapshot renders identically in any consumer. Domain snapshots get
//! their impls in [`models`]; collections and operation results get newtype
//! wrappers here.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanChoices, CalendarView)
//! - [`results`]: Operation result types (ToggleResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for snapshot models

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{CalendarView, PlanChoices};
pub use results::ToggleResult;
pub use status::OperationStatus;
