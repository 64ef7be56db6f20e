use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use skillstack::model::{ProgressStatus, ResourceType, SkillRecord};
use skillstack::views::dashboard;
use skillstack::views::filter::{self, StatusFilter};
use skillstack::views::timeline;

fn arb_status() -> impl Strategy<Value = ProgressStatus> {
    prop_oneof![
        Just(ProgressStatus::Started),
        Just(ProgressStatus::InProgress),
        Just(ProgressStatus::Completed),
    ]
}

fn arb_resource() -> impl Strategy<Value = ResourceType> {
    prop_oneof![
        Just(ResourceType::Course),
        Just(ResourceType::Video),
        Just(ResourceType::Article),
        Just(ResourceType::Book),
        Just(ResourceType::Tutorial),
        Just(ResourceType::Certification),
    ]
}

prop_compose! {
    fn arb_record()(
        id in 0i64..100_000,
        name in "[A-Za-z][A-Za-z ]{0,23}",
        resource in arb_resource(),
        status in arb_status(),
        hours in 0.0f64..500.0,
        difficulty in 1u8..=5,
        day_offset in 0i64..90,
        hour in 0i64..24,
    ) -> SkillRecord {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(day_offset)
            + Duration::hours(hour);
        SkillRecord {
            id,
            skill_name: name,
            resource_type: resource,
            platform: "Udemy".to_string(),
            progress_status: status,
            hours_spent: hours,
            notes: String::new(),
            difficulty_rating: difficulty,
            created_at: created,
            updated_at: created,
        }
    }
}

fn arb_collection() -> impl Strategy<Value = Vec<SkillRecord>> {
    prop::collection::vec(arb_record(), 0..40)
}

proptest! {
    #[test]
    fn filter_all_is_the_identity(records in arb_collection()) {
        let filtered = filter::by_status(&records, StatusFilter::All);
        prop_assert_eq!(filtered, records);
    }

    #[test]
    fn filter_only_keeps_matching_records(records in arb_collection(), status in arb_status()) {
        let filtered = filter::by_status(&records, StatusFilter::Only(status));
        prop_assert!(filtered.len() <= records.len());
        prop_assert!(filtered.iter().all(|r| r.progress_status == status));

        // Stability: the filtered ids appear in the same relative order.
        let expected: Vec<i64> = records
            .iter()
            .filter(|r| r.progress_status == status)
            .map(|r| r.id)
            .collect();
        let actual: Vec<i64> = filtered.iter().map(|r| r.id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn status_counts_never_exceed_total(records in arb_collection()) {
        let stats = dashboard::compute_stats(&records);
        prop_assert!(stats.completed + stats.in_progress <= stats.total);
        prop_assert_eq!(stats.total, records.len());
    }

    #[test]
    fn completion_rate_matches_the_rounding_formula(records in arb_collection()) {
        let stats = dashboard::compute_stats(&records);
        if records.is_empty() {
            prop_assert_eq!(stats.completion_rate_pct, 0);
        } else {
            let expected = (stats.completed as f64 / stats.total as f64 * 100.0).round() as u32;
            prop_assert_eq!(stats.completion_rate_pct, expected);
        }
    }

    #[test]
    fn category_breakdown_accounts_for_every_record(records in arb_collection()) {
        let stats = dashboard::compute_stats(&records);
        let counted: usize = stats.category_breakdown.iter().map(|c| c.count).sum();
        prop_assert_eq!(counted, records.len());
    }

    #[test]
    fn timeline_buckets_partition_the_collection(records in arb_collection()) {
        let buckets = timeline::group_by_creation_date(&records);

        // Keys are distinct calendar dates, strictly descending.
        for pair in buckets.windows(2) {
            prop_assert!(pair[0].date > pair[1].date);
        }

        // Every record lands in exactly one bucket, under its own date.
        let total: usize = buckets.iter().map(|b| b.skills.len()).sum();
        prop_assert_eq!(total, records.len());
        for bucket in &buckets {
            for skill in &bucket.skills {
                prop_assert_eq!(skill.created_at.date_naive(), bucket.date);
            }
        }
    }

    #[test]
    fn recent_preview_is_the_collection_tail(records in arb_collection()) {
        let stats = dashboard::compute_stats(&records);
        let start = records.len().saturating_sub(dashboard::RECENT_PREVIEW);
        prop_assert_eq!(stats.recent.as_slice(), &records[start..]);
    }
}
