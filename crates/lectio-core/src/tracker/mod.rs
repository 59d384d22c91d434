//! High-level tracker API for the reading plan session.
//!
//! This module provides the main [`Tracker`] interface. The tracker is the
//! single owner of the session state triple (selected plan, completed-day
//! set, current day pointer): handlers load it from storage, mutate it
//! through well-defined transitions, write it back immediately, and hand a
//! derived snapshot to the caller. Nothing outside this module touches the
//! state directly.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │  Session ops    │    │    Database     │
//! │ (select, nav,   │───▶│ (load/persist   │───▶│   (via db/)     │
//! │  toggle, stats) │    │  the triple)    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      State Management       Data Persistence
//! ```
//!
//! Every mutating handler persists before returning (write-through, no
//! batching), which keeps the stored state a faithful copy of the session
//! at all times.

use std::path::PathBuf;

use crate::models::PlanLibrary;

pub mod builder;
pub mod handlers;
pub mod session_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for the reading plan session.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) library: PlanLibrary,
    pub(crate) reference_year: i16,
}

impl Tracker {
    /// Creates a new tracker with the given database path, plan library,
    /// and reference year.
    pub(crate) fn new(db_path: PathBuf, library: PlanLibrary, reference_year: i16) -> Self {
        Self {
            db_path,
            library,
            reference_year,
        }
    }

    /// The year used to translate day indices to concrete dates.
    pub fn reference_year(&self) -> i16 {
        self.reference_year
    }

    /// The plan library the tracker selects from.
    pub fn library(&self) -> &PlanLibrary {
        &self.library
    }
}
