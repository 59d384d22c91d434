//! Session load and persist operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    calendar,
    db::Database,
    error::{Result, TrackerError},
    models::{Progress, Session},
};

impl Tracker {
    /// The default day pointer for a fresh session: today's index when
    /// today falls in the reference year, day 1 otherwise.
    pub(crate) fn default_day(&self) -> u16 {
        calendar::day_of_year_in(calendar::today(), self.reference_year).unwrap_or(1)
    }

    /// Loads the persisted session state.
    ///
    /// An absent plan id leaves the session uninitialized (no plan
    /// selected, empty progress). An absent or malformed current day falls
    /// back to the default day pointer.
    pub async fn load_session(&self) -> Result<Session> {
        let db_path = self.db_path.clone();
        let default_day = self.default_day();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let plan_id = db.selected_plan()?;
            let progress = match plan_id.as_deref() {
                Some(id) => db.completed_days(id)?,
                None => Progress::new(),
            };
            let current_day = db.current_day()?.unwrap_or(default_day);
            Ok(Session {
                plan_id,
                progress,
                current_day,
            })
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Writes the session state back to storage.
    ///
    /// The plan id and its completed-day set are written only when a plan
    /// is selected; the current day pointer is always written.
    pub async fn persist_session(&self, session: &Session) -> Result<()> {
        let db_path = self.db_path.clone();
        let session = session.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            if let Some(id) = session.plan_id.as_deref() {
                db.set_selected_plan(id)?;
                db.set_completed_days(id, &session.progress)?;
            }
            db.set_current_day(session.current_day)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
