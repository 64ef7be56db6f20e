//! Dashboard aggregates.
//!
//! The server exposes an optional pre-aggregated summary; when it is
//! missing or malformed the same numbers are computed locally from the
//! current snapshot. Both paths produce [`DashboardStats`].

use serde::Serialize;

use crate::model::{ProgressStatus, SkillRecord};
use crate::store::DashboardSummary;

/// How many records the "recently added" preview shows.
pub const RECENT_PREVIEW: usize = 3;

/// Count of goals per resource type, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Sum of hours spent, rounded to the nearest whole hour for display.
    pub total_hours: i64,
    pub completion_rate_pct: u32,
    pub category_breakdown: Vec<CategoryCount>,
    /// Last [`RECENT_PREVIEW`] records in collection order. A positional
    /// slice, not a recency sort; it only reflects insertion order.
    pub recent: Vec<SkillRecord>,
}

/// Compute the dashboard aggregates from a snapshot.
#[must_use]
pub fn compute_stats(records: &[SkillRecord]) -> DashboardStats {
    let total = records.len();
    let completed = records
        .iter()
        .filter(|r| r.progress_status == ProgressStatus::Completed)
        .count();
    let in_progress = records
        .iter()
        .filter(|r| r.progress_status == ProgressStatus::InProgress)
        .count();
    let total_hours: f64 = records.iter().map(|r| r.hours_spent).sum();

    let mut category_breakdown: Vec<CategoryCount> = Vec::new();
    for record in records {
        let name = record.resource_type.as_str();
        match category_breakdown.iter_mut().find(|c| c.name == name) {
            Some(entry) => entry.count += 1,
            None => category_breakdown.push(CategoryCount {
                name: name.to_string(),
                count: 1,
            }),
        }
    }

    DashboardStats {
        total,
        completed,
        in_progress,
        total_hours: round_to_i64(total_hours),
        completion_rate_pct: completion_rate(completed, total),
        category_breakdown,
        recent: recent_preview(records),
    }
}

/// Build stats from the server aggregate, filling the recent preview
/// from the local snapshot (the endpoint does not carry it).
#[must_use]
pub fn from_summary(summary: &DashboardSummary, records: &[SkillRecord]) -> DashboardStats {
    DashboardStats {
        total: usize::try_from(summary.total_goals.max(0)).unwrap_or(0),
        completed: usize::try_from(summary.completed_goals.max(0)).unwrap_or(0),
        in_progress: usize::try_from(summary.in_progress_goals.max(0)).unwrap_or(0),
        total_hours: round_to_i64(summary.total_hours),
        completion_rate_pct: summary.completion_rate.round().clamp(0.0, 100.0) as u32,
        category_breakdown: summary
            .category_breakdown
            .iter()
            .map(|c| CategoryCount {
                name: c.name.clone(),
                count: usize::try_from(c.count.max(0)).unwrap_or(0),
            })
            .collect(),
        recent: recent_preview(records),
    }
}

fn recent_preview(records: &[SkillRecord]) -> Vec<SkillRecord> {
    let start = records.len().saturating_sub(RECENT_PREVIEW);
    records[start..].to_vec()
}

fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

fn round_to_i64(hours: f64) -> i64 {
    hours.round() as i64
}
