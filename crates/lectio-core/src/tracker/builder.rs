//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Tracker;
use crate::{
    calendar,
    db::Database,
    error::{Result, TrackerError},
    models::PlanLibrary,
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    plans_path: Option<PathBuf>,
    library: Option<PlanLibrary>,
    reference_year: Option<i16>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lectio/lectio.db` or `~/.local/share/lectio/lectio.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom plan library file path.
    ///
    /// If not specified, looks for `$XDG_CONFIG_HOME/lectio/plans.json`;
    /// when that does not exist the tracker starts with an empty library.
    pub fn with_plans_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plans_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Supplies an already-constructed plan library, bypassing file loading.
    pub fn with_library(mut self, library: PlanLibrary) -> Self {
        self.library = Some(library);
        self
    }

    /// Sets the reference year used for day/date arithmetic.
    ///
    /// Defaults to the current year when unspecified.
    pub fn with_reference_year(mut self, year: Option<i16>) -> Self {
        if let Some(year) = year {
            self.reference_year = Some(year);
        }
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database path is invalid
    /// or the plan library file cannot be read.
    /// Returns `TrackerError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Tracker> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TrackerError>(())
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let library = match self.library {
            Some(library) => library,
            None => Self::load_library(self.plans_path)?,
        };

        let reference_year = self
            .reference_year
            .unwrap_or_else(|| calendar::today().year());

        Ok(Tracker::new(db_path, library, reference_year))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lectio")
            .place_data_file("lectio.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }

    /// Loads the plan library from the given path, the XDG config location,
    /// or falls back to an empty library.
    fn load_library(path: Option<PathBuf>) -> Result<PlanLibrary> {
        match path {
            Some(path) => PlanLibrary::from_path(path),
            None => {
                match xdg::BaseDirectories::with_prefix("lectio").find_config_file("plans.json") {
                    Some(path) => PlanLibrary::from_path(path),
                    None => Ok(PlanLibrary::new()),
                }
            }
        }
    }
}
