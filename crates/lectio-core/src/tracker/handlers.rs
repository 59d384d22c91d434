//! High-level tracker operations returning formatted wrapper types.
//!
//! Each handler loads the session, applies one transition, persists the
//! result, and returns a snapshot for display. Handlers return `Ok(None)`
//! when no plan is selected or the selected id is missing from the
//! library: a missing plan makes display operations no-ops, never errors.

use jiff::civil::Date;

use super::Tracker;
use crate::{
    calendar::{self, PLAN_DAYS},
    db::Database,
    display::{CalendarView, PlanChoices, ToggleResult},
    error::{Result, TrackerError},
    models::{
        CalendarRow, DaySnapshot, Plan, PlanChoice, Progress, Session, Stats, StatsReport,
    },
    params::{GoToDate, SelectPlan, ToggleDay},
};

impl Tracker {
    /// Lists the selectable plans in the library.
    pub fn plan_choices(&self) -> PlanChoices {
        PlanChoices(
            self.library
                .iter()
                .map(|(id, plan)| PlanChoice {
                    id: id.clone(),
                    name: plan.name.clone(),
                })
                .collect(),
        )
    }

    /// Selects the active plan and initializes its session.
    ///
    /// Loads any previously persisted progress for that plan (per-plan
    /// isolation: switching plans never conflates completed-day sets),
    /// resets the day pointer to the default starting day, persists, and
    /// returns the day snapshot.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::PlanNotFound` when the id is not in the
    /// library.
    pub async fn select_plan(&self, params: &SelectPlan) -> Result<DaySnapshot> {
        let plan = self
            .library
            .get(&params.id)
            .ok_or_else(|| TrackerError::PlanNotFound {
                id: params.id.clone(),
            })?;

        let mut session = self.load_session().await?;
        session.plan_id = Some(params.id.clone());
        session.progress = self.load_progress_for(&params.id).await?;
        session.current_day = self.default_day();
        self.persist_session(&session).await?;

        Ok(self.snapshot_for(plan, &session))
    }

    /// Returns the snapshot for the current day, or None when no plan is
    /// selected.
    pub async fn current_reading(&self) -> Result<Option<DaySnapshot>> {
        let session = self.load_session().await?;
        Ok(self.snapshot(&session))
    }

    /// Moves the day pointer back one day, clamping at day 1.
    pub async fn previous_day(&self) -> Result<Option<DaySnapshot>> {
        let mut session = self.load_session().await?;
        if session.current_day > 1 {
            session.current_day -= 1;
            self.persist_session(&session).await?;
        }
        Ok(self.snapshot(&session))
    }

    /// Moves the day pointer forward one day, clamping at day 365.
    pub async fn next_day(&self) -> Result<Option<DaySnapshot>> {
        let mut session = self.load_session().await?;
        if session.current_day < PLAN_DAYS {
            session.current_day += 1;
            self.persist_session(&session).await?;
        }
        Ok(self.snapshot(&session))
    }

    /// Jumps the day pointer to today's day of year, unconditionally.
    ///
    /// In a leap year this can land on day 366, which has no reading and
    /// renders as "plan completed" rather than erroring.
    pub async fn go_to_today(&self) -> Result<Option<DaySnapshot>> {
        self.go_to(calendar::today()).await
    }

    /// Jumps the day pointer to the given date's day of year.
    pub async fn go_to_date(&self, params: &GoToDate) -> Result<Option<DaySnapshot>> {
        let date = params
            .date
            .parse::<Date>()
            .map_err(|e| TrackerError::invalid_input("date", e.to_string()))?;
        self.go_to(date).await
    }

    async fn go_to(&self, date: Date) -> Result<Option<DaySnapshot>> {
        let mut session = self.load_session().await?;
        session.current_day = calendar::day_of_year(date);
        self.persist_session(&session).await?;
        Ok(self.snapshot(&session))
    }

    /// Toggles completion for the given day (or the current day), persists,
    /// and returns the outcome with recomputed statistics.
    pub async fn toggle_day(&self, params: &ToggleDay) -> Result<Option<ToggleResult>> {
        let mut session = self.load_session().await?;
        if self.selected_plan(&session).is_none() {
            return Ok(None);
        }

        let day = params.day.unwrap_or(session.current_day);
        let completed = session.progress.toggle(day);
        self.persist_session(&session).await?;

        Ok(Some(ToggleResult {
            day,
            completed,
            stats: Stats::compute(&session.progress, session.current_day),
        }))
    }

    /// Computes the aggregate statistics for the selected plan.
    pub async fn stats(&self) -> Result<Option<StatsReport>> {
        let session = self.load_session().await?;
        let plan = match self.selected_plan(&session) {
            Some(plan) => plan,
            None => return Ok(None),
        };

        Ok(Some(StatsReport {
            plan_name: plan.name.clone(),
            stats: Stats::compute(&session.progress, session.current_day),
        }))
    }

    /// Builds the full 365-row calendar table for the selected plan.
    ///
    /// Today's row is marked only when today falls in the reference year.
    pub async fn calendar(&self) -> Result<Option<CalendarView>> {
        let session = self.load_session().await?;
        let plan = match self.selected_plan(&session) {
            Some(plan) => plan,
            None => return Ok(None),
        };

        let today = calendar::day_of_year_in(calendar::today(), self.reference_year);
        let mut rows = Vec::with_capacity(usize::from(PLAN_DAYS));
        for day in 1..=PLAN_DAYS {
            let date = calendar::day_to_date(day, self.reference_year)?;
            rows.push(CalendarRow {
                day,
                completed: session.progress.contains(day),
                date_label: calendar::format_date(date),
                reading: plan.reading_for_day(day),
                is_today: today == Some(day),
            });
        }

        Ok(Some(CalendarView(rows)))
    }

    /// Resolves the selected plan from the library, if any.
    fn selected_plan(&self, session: &Session) -> Option<&Plan> {
        session
            .plan_id
            .as_deref()
            .and_then(|id| self.library.get(id))
    }

    /// Derives the day snapshot for the session, or None when no plan is
    /// selected.
    fn snapshot(&self, session: &Session) -> Option<DaySnapshot> {
        self.selected_plan(session)
            .map(|plan| self.snapshot_for(plan, session))
    }

    /// Derives the day snapshot for a known plan.
    fn snapshot_for(&self, plan: &Plan, session: &Session) -> DaySnapshot {
        let date_label = calendar::day_to_date(session.current_day, self.reference_year)
            .map(calendar::format_date)
            .unwrap_or_default();

        DaySnapshot {
            plan_name: plan.name.clone(),
            day: session.current_day,
            date_label,
            reading: plan.reading_for_day(session.current_day),
            completed: session.progress.contains(session.current_day),
        }
    }

    /// Loads the persisted completed-day set for a plan id.
    async fn load_progress_for(&self, plan_id: &str) -> Result<Progress> {
        let db_path = self.db_path.clone();
        let plan_id = plan_id.to_string();

        tokio::task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.completed_days(&plan_id)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
