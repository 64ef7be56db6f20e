//! Test doubles for the goal store.
//!
//! [`InMemoryGoalStore`] simulates the remote API without network
//! access: ids and timestamps are assigned the way the server would,
//! and read/write failures can be injected per test.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use chrono::Utc;

use crate::error::{Result, SksError};
use crate::model::{GoalPatch, NewGoal, SkillRecord};
use crate::store::{DashboardSummary, GoalStore};

#[derive(Debug, Default)]
pub struct InMemoryGoalStore {
    goals: Mutex<Vec<SkillRecord>>,
    next_id: AtomicI64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    dashboard: Mutex<Option<DashboardSummary>>,
}

impl InMemoryGoalStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    /// Seed a record directly, bypassing failure injection.
    pub fn push(&self, goal: NewGoal) -> SkillRecord {
        let record = self.materialize(&goal);
        self.goals.lock().unwrap().push(record.clone());
        record
    }

    /// Make subsequent reads fail with a transport error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail with a transport error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Configure the optional dashboard endpoint. Unset means the
    /// endpoint is unavailable.
    pub fn set_dashboard(&self, summary: DashboardSummary) {
        *self.dashboard.lock().unwrap() = Some(summary);
    }

    fn materialize(&self, goal: &NewGoal) -> SkillRecord {
        let now = Utc::now();
        SkillRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            skill_name: goal.skill_name.clone(),
            resource_type: goal.resource_type,
            platform: goal.platform.clone(),
            progress_status: goal.progress_status,
            hours_spent: goal.hours_spent,
            notes: goal.notes.clone(),
            difficulty_rating: goal.difficulty_rating,
            created_at: now,
            updated_at: now,
        }
    }
}

impl GoalStore for InMemoryGoalStore {
    fn list_all(&self) -> Result<Vec<SkillRecord>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(SksError::transport("list goals", "simulated network failure"));
        }
        Ok(self.goals.lock().unwrap().clone())
    }

    fn create(&self, goal: &NewGoal) -> Result<SkillRecord> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SksError::transport("create goal", "simulated network failure"));
        }
        let record = self.materialize(goal);
        self.goals.lock().unwrap().push(record.clone());
        Ok(record)
    }

    fn update(&self, id: i64, patch: &GoalPatch) -> Result<SkillRecord> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SksError::transport("update goal", "simulated network failure"));
        }
        let mut goals = self.goals.lock().unwrap();
        let record = goals
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(SksError::GoalNotFound(id))?;

        if let Some(status) = patch.progress_status {
            record.progress_status = status;
        }
        if let Some(hours) = patch.hours_spent {
            record.hours_spent = hours;
        }
        if let Some(ref notes) = patch.notes {
            record.notes = notes.clone();
        }
        if let Some(rating) = patch.difficulty_rating {
            record.difficulty_rating = rating;
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    fn delete(&self, id: i64) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SksError::transport("delete goal", "simulated network failure"));
        }
        let mut goals = self.goals.lock().unwrap();
        let before = goals.len();
        goals.retain(|r| r.id != id);
        if goals.len() == before {
            return Err(SksError::GoalNotFound(id));
        }
        Ok(())
    }

    fn dashboard(&self) -> Result<DashboardSummary> {
        self.dashboard
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| SksError::DashboardUnavailable("endpoint not configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(name: &str) -> NewGoal {
        NewGoal {
            skill_name: name.to_string(),
            platform: "Udemy".to_string(),
            ..NewGoal::default()
        }
    }

    #[test]
    fn assigns_sequential_ids() {
        let store = InMemoryGoalStore::new();
        let a = store.create(&goal("a")).unwrap();
        let b = store.create(&goal("b")).unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[test]
    fn update_applies_only_patched_fields() {
        let store = InMemoryGoalStore::new();
        let created = store.create(&goal("a")).unwrap();

        let patch = GoalPatch {
            hours_spent: Some(3.5),
            ..GoalPatch::default()
        };
        let updated = store.update(created.id, &patch).unwrap();
        assert_eq!(updated.hours_spent, 3.5);
        assert_eq!(updated.skill_name, "a");
        assert_eq!(updated.progress_status, created.progress_status);
    }

    #[test]
    fn delete_of_unknown_id_is_not_found() {
        let store = InMemoryGoalStore::new();
        assert!(matches!(store.delete(99), Err(SksError::GoalNotFound(99))));
    }

    #[test]
    fn injected_read_failure_surfaces_as_transport() {
        let store = InMemoryGoalStore::new();
        store.fail_reads(true);
        assert!(matches!(store.list_all(), Err(SksError::Transport { .. })));
    }
}
