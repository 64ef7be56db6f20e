//! Client for the remote goal store.
//!
//! One HTTP attempt per action; there is no retry layer. Transport
//! failures map into [`SksError::Transport`] and leave the local
//! snapshot untouched.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{Result, SksError};
use crate::model::{GoalPatch, NewGoal, SkillRecord};

/// Persistence operations the client needs. The HTTP implementation is
/// the real one; tests substitute an in-memory store.
pub trait GoalStore {
    fn list_all(&self) -> Result<Vec<SkillRecord>>;
    fn create(&self, goal: &NewGoal) -> Result<SkillRecord>;
    fn update(&self, id: i64, patch: &GoalPatch) -> Result<SkillRecord>;
    fn delete(&self, id: i64) -> Result<()>;

    /// The optional pre-aggregated dashboard endpoint. Errors here are
    /// downgraded by callers, never shown to the user.
    fn dashboard(&self) -> Result<DashboardSummary>;
}

/// Server-side dashboard aggregate. `total_goals` is the marker field:
/// a response without it is treated as DashboardUnavailable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_goals: i64,
    #[serde(default)]
    pub completed_goals: i64,
    #[serde(default)]
    pub in_progress_goals: i64,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub category_breakdown: Vec<SummaryCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryCategory {
    pub name: String,
    pub count: i64,
}

/// Blocking HTTP client for the goal API.
pub struct HttpGoalStore {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl std::fmt::Debug for HttpGoalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGoalStore")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpGoalStore {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::with_base_url(&config.base_url, config.timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(SksError::Config("api base_url is empty; set [api].base_url".to_string()));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout.max(Duration::from_secs(1)))
            .build()
            .map_err(|err| SksError::Config(format!("goal store http client: {err}")))?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn check_status(
        op: &'static str,
        response: reqwest::blocking::Response,
        id: Option<i64>,
    ) -> Result<reqwest::blocking::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(SksError::GoalNotFound(id));
            }
        }
        Err(SksError::transport(op, format!("server returned {status}")))
    }
}

impl GoalStore for HttpGoalStore {
    fn list_all(&self) -> Result<Vec<SkillRecord>> {
        tracing::debug!(url = %self.url("/api/goals/"), "fetching goals");
        let response = self
            .client
            .get(self.url("/api/goals/"))
            .send()
            .map_err(|err| SksError::transport("list goals", err))?;
        Self::check_status("list goals", response, None)?
            .json()
            .map_err(|err| SksError::transport("list goals", format!("decode response: {err}")))
    }

    fn create(&self, goal: &NewGoal) -> Result<SkillRecord> {
        let response = self
            .client
            .post(self.url("/api/goals/"))
            .json(goal)
            .send()
            .map_err(|err| SksError::transport("create goal", err))?;
        Self::check_status("create goal", response, None)?
            .json()
            .map_err(|err| SksError::transport("create goal", format!("decode response: {err}")))
    }

    fn update(&self, id: i64, patch: &GoalPatch) -> Result<SkillRecord> {
        let response = self
            .client
            .put(self.url(&format!("/api/goals/{id}")))
            .json(patch)
            .send()
            .map_err(|err| SksError::transport("update goal", err))?;
        Self::check_status("update goal", response, Some(id))?
            .json()
            .map_err(|err| SksError::transport("update goal", format!("decode response: {err}")))
    }

    fn delete(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/goals/{id}")))
            .send()
            .map_err(|err| SksError::transport("delete goal", err))?;
        Self::check_status("delete goal", response, Some(id))?;
        Ok(())
    }

    fn dashboard(&self) -> Result<DashboardSummary> {
        let response = self
            .client
            .get(self.url("/api/dashboard"))
            .send()
            .map_err(|err| SksError::DashboardUnavailable(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SksError::DashboardUnavailable(format!("server returned {status}")));
        }
        response
            .json()
            .map_err(|err| SksError::DashboardUnavailable(format!("decode response: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let store =
            HttpGoalStore::with_base_url("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(store.base_url(), "http://localhost:8000");
        assert_eq!(store.url("/api/goals/"), "http://localhost:8000/api/goals/");
    }

    #[test]
    fn empty_base_url_is_a_config_error() {
        let result = HttpGoalStore::with_base_url("  ", Duration::from_secs(5));
        assert!(matches!(result, Err(SksError::Config(_))));
    }

    #[test]
    fn summary_requires_total_goals_marker() {
        let malformed = serde_json::json!({"completed_goals": 3});
        assert!(serde_json::from_value::<DashboardSummary>(malformed).is_err());

        let minimal = serde_json::json!({"total_goals": 3});
        let summary = serde_json::from_value::<DashboardSummary>(minimal).unwrap();
        assert_eq!(summary.total_goals, 3);
        assert_eq!(summary.completed_goals, 0);
        assert!(summary.category_breakdown.is_empty());
    }
}
