//! Timeline grouping by creation date.

use chrono::NaiveDate;

use crate::model::SkillRecord;

/// Records sharing one calendar creation date, most recent day first in
/// the surrounding sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub skills: Vec<SkillRecord>,
}

/// Bucket records by the calendar date of `created_at` (time of day is
/// ignored) and sort the buckets descending by date. Within a bucket the
/// collection order is preserved.
#[must_use]
pub fn group_by_creation_date(records: &[SkillRecord]) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = Vec::new();
    for record in records {
        let date = record.created_at.date_naive();
        match buckets.iter_mut().find(|b| b.date == date) {
            Some(bucket) => bucket.skills.push(record.clone()),
            None => buckets.push(DayBucket {
                date,
                skills: vec![record.clone()],
            }),
        }
    }
    buckets.sort_by(|a, b| b.date.cmp(&a.date));
    buckets
}
