//! View/state orchestration.
//!
//! [`App`] holds the single source of truth for a session: the current
//! view, the goal snapshot, the loading flag, and the add-form state.
//! State changes only through the named action methods; the presentation
//! layer reads, never writes.
//!
//! Refreshes are generation-counted: each one carries the counter value
//! at issue time and [`App::apply_refresh`] drops any result that is not
//! the newest issued, so a stale response can never overwrite a newer
//! one even when two mutations race.

use std::sync::Arc;

use crate::error::Result;
use crate::model::{GoalPatch, NewGoal, SkillCollection, SkillRecord};
use crate::store::{DashboardSummary, GoalStore};
use crate::views::dashboard::{self, DashboardStats};
use crate::views::filter::{self, StatusFilter};
use crate::views::insights::{self, Insights};
use crate::views::timeline::{self, DayBucket};

pub type SharedStore = Arc<dyn GoalStore + Send + Sync>;

/// The fixed set of views. Transitions happen only through explicit
/// navigation actions; nothing switches views on its own except a
/// successful add, which lands on Skills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Dashboard,
    Skills,
    Timeline,
    Insights,
}

impl View {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Dashboard,
        Self::Skills,
        Self::Timeline,
        Self::Insights,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::Skills => "Skills",
            Self::Timeline => "Timeline",
            Self::Insights => "Insights",
        }
    }
}

/// Everything one refresh round trip brings back. The dashboard summary
/// rides along so the optional endpoint is polled at the same cadence as
/// the list.
#[derive(Debug)]
pub struct RefreshPayload {
    pub goals: Vec<SkillRecord>,
    pub summary: Option<DashboardSummary>,
}

/// Fetch the goal list plus the optional dashboard aggregate. A failing
/// aggregate is downgraded silently; a failing list is the caller's
/// error.
pub fn fetch_payload(store: &dyn GoalStore) -> Result<RefreshPayload> {
    let goals = store.list_all()?;
    let summary = match store.dashboard() {
        Ok(summary) => Some(summary),
        Err(err) => {
            tracing::debug!(%err, "dashboard aggregate unavailable, falling back to local stats");
            None
        }
    };
    Ok(RefreshPayload { goals, summary })
}

/// One-line status surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    store: SharedStore,
    view: View,
    loading: bool,
    show_add_form: bool,
    skills: SkillCollection,
    filter: StatusFilter,
    remote_summary: Option<DashboardSummary>,
    status: Option<StatusLine>,
    issued_gen: u64,
}

impl App {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            view: View::Home,
            loading: false,
            show_add_form: false,
            skills: SkillCollection::new(),
            filter: StatusFilter::All,
            remote_summary: None,
            status: None,
            issued_gen: 0,
        }
    }

    // --- read-only state for the presentation layer ---

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn show_add_form(&self) -> bool {
        self.show_add_form
    }

    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    #[must_use]
    pub fn skills(&self) -> &[SkillRecord] {
        self.skills.current()
    }

    #[must_use]
    pub const fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    // --- derived presentations, recomputed per call from the snapshot ---

    /// Skills list after the active status filter.
    #[must_use]
    pub fn visible_skills(&self) -> Vec<SkillRecord> {
        filter::by_status(self.skills.current(), self.filter)
    }

    /// Server aggregate when the last refresh brought one back, local
    /// computation otherwise.
    #[must_use]
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.remote_summary.as_ref().map_or_else(
            || dashboard::compute_stats(self.skills.current()),
            |summary| dashboard::from_summary(summary, self.skills.current()),
        )
    }

    #[must_use]
    pub fn timeline(&self) -> Vec<DayBucket> {
        timeline::group_by_creation_date(self.skills.current())
    }

    #[must_use]
    pub fn insights(&self) -> Insights {
        insights::compute(self.skills.current())
    }

    // --- navigation and form state ---

    pub fn navigate(&mut self, view: View) {
        self.view = view;
        self.status = None;
    }

    pub fn open_add_form(&mut self) {
        self.show_add_form = true;
    }

    pub fn close_add_form(&mut self) {
        self.show_add_form = false;
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine { text: text.into(), is_error: false });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine { text: text.into(), is_error: true });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // --- refresh sequencing ---

    /// Issue a new refresh generation. `loading` stays true until the
    /// newest issued generation resolves.
    pub fn begin_refresh(&mut self) -> u64 {
        self.issued_gen += 1;
        self.loading = true;
        self.issued_gen
    }

    /// Apply a refresh result. Results for anything but the newest
    /// issued generation are dropped.
    pub fn apply_refresh(&mut self, generation: u64, result: Result<RefreshPayload>) {
        if generation != self.issued_gen {
            tracing::debug!(generation, newest = self.issued_gen, "dropping stale refresh");
            return;
        }
        match result {
            Ok(payload) => {
                self.skills.replace_all(payload.goals);
                self.remote_summary = payload.summary;
            }
            Err(err) => {
                // Keep rendering the last snapshot; a failed read is
                // logged, never fatal.
                tracing::warn!(%err, "refresh failed, keeping previous snapshot");
                self.set_error(format!("Refresh failed: {err}"));
            }
        }
        self.loading = false;
    }

    /// Fetch and apply in one blocking step. The TUI instead runs
    /// [`fetch_payload`] on a worker and feeds [`Self::apply_refresh`].
    pub fn run_refresh(&mut self, generation: u64) {
        let result = fetch_payload(self.store.as_ref());
        self.apply_refresh(generation, result);
    }

    // --- mutating actions (one HTTP attempt, then a refresh) ---

    /// Create a goal. On success the add form closes, the view is forced
    /// to Skills, and the returned refresh generation must be driven to
    /// completion by the caller.
    pub fn submit_add(&mut self, goal: &NewGoal) -> Result<u64> {
        goal.validate()?;
        match self.store().create(goal) {
            Ok(created) => {
                self.show_add_form = false;
                self.view = View::Skills;
                self.set_status(format!("Added \"{}\"", created.skill_name));
                Ok(self.begin_refresh())
            }
            Err(err) => {
                self.set_error(format!("Could not add goal: {err}"));
                Err(err)
            }
        }
    }

    /// Update a goal's mutable fields. The view does not change.
    pub fn submit_update(&mut self, id: i64, patch: &GoalPatch) -> Result<u64> {
        patch.validate()?;
        match self.store().update(id, patch) {
            Ok(updated) => {
                self.set_status(format!("Updated \"{}\"", updated.skill_name));
                Ok(self.begin_refresh())
            }
            Err(err) => {
                self.set_error(format!("Could not update goal: {err}"));
                Err(err)
            }
        }
    }

    /// Delete a goal. The view does not change.
    pub fn submit_delete(&mut self, id: i64) -> Result<u64> {
        match self.store().delete(id) {
            Ok(()) => {
                self.set_status(format!("Deleted goal {id}"));
                Ok(self.begin_refresh())
            }
            Err(err) => {
                self.set_error(format!("Could not delete goal: {err}"));
                Err(err)
            }
        }
    }
}
