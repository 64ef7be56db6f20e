//! Status filtering for the skills list.

use serde::Serialize;

use crate::error::{Result, SksError};
use crate::model::{ProgressStatus, SkillRecord};

/// Which subset of the collection the skills list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProgressStatus),
}

impl StatusFilter {
    /// Cycle order used by the TUI filter tabs: all, then each status.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Only(ProgressStatus::Started),
            Self::Only(ProgressStatus::Started) => Self::Only(ProgressStatus::InProgress),
            Self::Only(ProgressStatus::InProgress) => Self::Only(ProgressStatus::Completed),
            Self::Only(ProgressStatus::Completed) => Self::All,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = SksError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<ProgressStatus>().map(Self::Only)
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable subsequence of `records` matching `filter`. `All` returns the
/// input unchanged in order and length.
#[must_use]
pub fn by_status(records: &[SkillRecord], filter: StatusFilter) -> Vec<SkillRecord> {
    match filter {
        StatusFilter::All => records.to_vec(),
        StatusFilter::Only(status) => records
            .iter()
            .filter(|r| r.progress_status == status)
            .cloned()
            .collect(),
    }
}

/// Count of records matching `filter`, used for the tab labels.
#[must_use]
pub fn count(records: &[SkillRecord], filter: StatusFilter) -> usize {
    match filter {
        StatusFilter::All => records.len(),
        StatusFilter::Only(status) => records.iter().filter(|r| r.progress_status == status).count(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::ResourceType;

    fn record(id: i64, status: ProgressStatus) -> SkillRecord {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        SkillRecord {
            id,
            skill_name: format!("skill-{id}"),
            resource_type: ResourceType::Course,
            platform: "Udemy".to_string(),
            progress_status: status,
            hours_spent: 0.0,
            notes: String::new(),
            difficulty_rating: 1,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn all_returns_input_unchanged() {
        let records = vec![
            record(1, ProgressStatus::Started),
            record(2, ProgressStatus::Completed),
            record(3, ProgressStatus::InProgress),
        ];
        assert_eq!(by_status(&records, StatusFilter::All), records);
    }

    #[test]
    fn only_keeps_matching_status_in_order() {
        let records = vec![
            record(1, ProgressStatus::Completed),
            record(2, ProgressStatus::Started),
            record(3, ProgressStatus::Completed),
        ];
        let completed = by_status(&records, StatusFilter::Only(ProgressStatus::Completed));
        let ids: Vec<i64> = completed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filter_cycle_wraps_back_to_all() {
        let mut filter = StatusFilter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);
    }

    #[test]
    fn filter_parses_all_and_statuses() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "in-progress".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(ProgressStatus::InProgress)
        );
        assert!("finished".parse::<StatusFilter>().is_err());
    }
}
