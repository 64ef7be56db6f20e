//! Recommendation and analytics panel.
//!
//! Recommendations come from a static keyword table matched against
//! skill names; the table is data, not branching logic, so extending it
//! is a one-line change.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::SkillRecord;

/// Ordered (keyword, suggestions) table. Matching rows contribute their
/// suggestions in table order; hits are concatenated, not deduplicated.
const KEYWORD_SUGGESTIONS: &[(&str, [&str; 3])] = &[
    ("react", ["Next.js Framework", "TypeScript", "React Testing"]),
    ("python", ["Django", "Data Science", "Machine Learning"]),
];

/// Returned when no keyword matches any skill name.
const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "JavaScript Fundamentals",
    "Git Version Control",
    "Problem Solving",
];

#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub recommendations: Vec<String>,
    pub analytics: Analytics,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analytics {
    /// Raw (unrounded) sum of hours spent.
    pub total_hours: f64,
    /// Mean difficulty rating; 0 for an empty collection. Display to one
    /// decimal place.
    pub avg_difficulty: f64,
    /// Resource type of the first record in collection order. Not a true
    /// mode; the approximation is kept deliberately.
    pub most_active_category: Option<String>,
    /// Consecutive calendar days, ending at the most recent creation
    /// date, with at least one record created.
    pub streak_days: u32,
}

impl Analytics {
    /// `avg_difficulty` formatted the way the panel shows it.
    #[must_use]
    pub fn avg_difficulty_display(&self) -> String {
        format!("{:.1}", self.avg_difficulty)
    }

    #[must_use]
    pub fn category_display(&self) -> &str {
        self.most_active_category.as_deref().unwrap_or("N/A")
    }
}

#[must_use]
pub fn compute(records: &[SkillRecord]) -> Insights {
    Insights {
        recommendations: recommendations(records),
        analytics: analytics(records),
    }
}

fn recommendations(records: &[SkillRecord]) -> Vec<String> {
    let names: Vec<String> = records.iter().map(|r| r.skill_name.to_lowercase()).collect();

    let mut out = Vec::new();
    for (keyword, suggestions) in KEYWORD_SUGGESTIONS {
        if names.iter().any(|name| name.contains(keyword)) {
            out.extend(suggestions.iter().map(|s| (*s).to_string()));
        }
    }

    if out.is_empty() {
        FALLBACK_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect()
    } else {
        out
    }
}

fn analytics(records: &[SkillRecord]) -> Analytics {
    let total_hours: f64 = records.iter().map(|r| r.hours_spent).sum();
    let avg_difficulty = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| f64::from(r.difficulty_rating)).sum::<f64>() / records.len() as f64
    };

    Analytics {
        total_hours,
        avg_difficulty,
        most_active_category: records.first().map(|r| r.resource_type.as_str().to_string()),
        streak_days: streak_days(records),
    }
}

/// Length of the run of consecutive calendar days ending at the most
/// recent creation date.
fn streak_days(records: &[SkillRecord]) -> u32 {
    let dates: BTreeSet<NaiveDate> = records.iter().map(|r| r.created_at.date_naive()).collect();
    let Some(&latest) = dates.iter().next_back() else {
        return 0;
    };

    let mut streak = 0u32;
    let mut day = latest;
    while dates.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::{ProgressStatus, ResourceType};

    fn named(id: i64, name: &str) -> SkillRecord {
        record(id, name, ResourceType::Course, 0.0, 1, 2024, 3, 1)
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        id: i64,
        name: &str,
        resource: ResourceType,
        hours: f64,
        difficulty: u8,
        y: i32,
        m: u32,
        d: u32,
    ) -> SkillRecord {
        let ts = Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap();
        SkillRecord {
            id,
            skill_name: name.to_string(),
            resource_type: resource,
            platform: "Udemy".to_string(),
            progress_status: ProgressStatus::Started,
            hours_spent: hours,
            notes: String::new(),
            difficulty_rating: difficulty,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn react_skill_pulls_react_suggestions() {
        let insights = compute(&[named(1, "Learning React")]);
        assert!(insights.recommendations.contains(&"Next.js Framework".to_string()));
    }

    #[test]
    fn no_keyword_match_returns_exact_fallback() {
        let insights = compute(&[named(1, "Cooking")]);
        assert_eq!(
            insights.recommendations,
            vec![
                "JavaScript Fundamentals".to_string(),
                "Git Version Control".to_string(),
                "Problem Solving".to_string(),
            ]
        );
    }

    #[test]
    fn multiple_keyword_hits_concatenate_in_table_order() {
        let insights = compute(&[named(1, "Python for React devs")]);
        assert_eq!(
            insights.recommendations,
            vec![
                "Next.js Framework".to_string(),
                "TypeScript".to_string(),
                "React Testing".to_string(),
                "Django".to_string(),
                "Data Science".to_string(),
                "Machine Learning".to_string(),
            ]
        );
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let insights = compute(&[named(1, "REACT BASICS")]);
        assert!(insights.recommendations.contains(&"TypeScript".to_string()));
    }

    #[test]
    fn analytics_on_empty_collection() {
        let insights = compute(&[]);
        assert_eq!(insights.analytics.total_hours, 0.0);
        assert_eq!(insights.analytics.avg_difficulty, 0.0);
        assert_eq!(insights.analytics.avg_difficulty_display(), "0.0");
        assert_eq!(insights.analytics.category_display(), "N/A");
        assert_eq!(insights.analytics.streak_days, 0);
    }

    #[test]
    fn avg_difficulty_is_a_mean_shown_to_one_decimal() {
        let records = vec![
            record(1, "a", ResourceType::Course, 0.0, 2, 2024, 3, 1),
            record(2, "b", ResourceType::Course, 0.0, 3, 2024, 3, 1),
            record(3, "c", ResourceType::Course, 0.0, 3, 2024, 3, 1),
        ];
        let analytics = compute(&records).analytics;
        assert_eq!(analytics.avg_difficulty_display(), "2.7");
    }

    #[test]
    fn most_active_category_is_first_record() {
        // First-record approximation, kept on purpose.
        let records = vec![
            record(1, "a", ResourceType::Book, 0.0, 1, 2024, 3, 1),
            record(2, "b", ResourceType::Course, 0.0, 1, 2024, 3, 1),
            record(3, "c", ResourceType::Course, 0.0, 1, 2024, 3, 1),
        ];
        assert_eq!(compute(&records).analytics.category_display(), "book");
    }

    #[test]
    fn streak_counts_consecutive_days_ending_at_latest() {
        let records = vec![
            record(1, "a", ResourceType::Course, 0.0, 1, 2024, 3, 5),
            record(2, "b", ResourceType::Course, 0.0, 1, 2024, 3, 4),
            record(3, "c", ResourceType::Course, 0.0, 1, 2024, 3, 4),
            record(4, "d", ResourceType::Course, 0.0, 1, 2024, 3, 1),
        ];
        assert_eq!(compute(&records).analytics.streak_days, 2);
    }

    #[test]
    fn streak_of_one_for_a_single_day() {
        assert_eq!(compute(&[named(1, "solo")]).analytics.streak_days, 1);
    }
}
