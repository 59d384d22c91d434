//! The external plan library: a mapping from plan identifier to plan.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Plan;
use crate::error::{Result, TrackerError};

/// Static plan content, keyed by plan identifier.
///
/// The library is external content consumed by the tracker, not generated
/// by it. It is loaded once at startup from a JSON file mapping plan ids
/// to plan records; an empty library is valid and simply offers no plans
/// to select.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PlanLibrary {
    plans: BTreeMap<String, Plan>,
}

impl PlanLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a library from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path.as_ref()).map_err(|e| TrackerError::FileSystem {
                path: path.as_ref().to_path_buf(),
                source: e,
            })?;
        Self::from_json(&contents)
    }

    /// Parses a library from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks up a plan by its identifier.
    pub fn get(&self, id: &str) -> Option<&Plan> {
        self.plans.get(id)
    }

    /// Returns true when the library offers no plans.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Iterates over (id, plan) pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Plan)> {
        self.plans.iter()
    }

    /// Inserts a plan under the given identifier.
    ///
    /// Primarily useful for constructing libraries in tests.
    pub fn insert(&mut self, id: impl Into<String>, plan: Plan) {
        self.plans.insert(id.into(), plan);
    }
}
