//! HTTP store tests against a mock goal API.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use skillstack::controller::fetch_payload;
use skillstack::error::SksError;
use skillstack::model::{GoalPatch, NewGoal, ProgressStatus, ResourceType};
use skillstack::store::{GoalStore, HttpGoalStore};

fn store_for(server: &MockServer) -> HttpGoalStore {
    HttpGoalStore::with_base_url(&server.base_url(), Duration::from_secs(5)).unwrap()
}

fn goal_json(id: i64, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "skill_name": name,
        "resource_type": "course",
        "platform": "Udemy",
        "progress_status": status,
        "hours_spent": 2.0,
        "notes": "",
        "difficulty_rating": 2,
        "created_at": "2024-03-01T09:00:00Z",
        "updated_at": "2024-03-01T09:00:00Z"
    })
}

#[test]
fn list_all_decodes_records_in_server_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/goals/");
        then.status(200)
            .json_body(json!([goal_json(2, "Rust", "started"), goal_json(1, "Go", "completed")]));
    });

    let goals = store_for(&server).list_all().unwrap();
    mock.assert();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id, 2);
    assert_eq!(goals[1].progress_status, ProgressStatus::Completed);
}

#[test]
fn create_posts_the_full_goal_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/goals/").json_body(json!({
            "skill_name": "React Basics",
            "resource_type": "course",
            "platform": "Udemy",
            "progress_status": "started",
            "hours_spent": 0.0,
            "notes": "",
            "difficulty_rating": 1
        }));
        then.status(200).json_body(goal_json(5, "React Basics", "started"));
    });

    let goal = NewGoal {
        skill_name: "React Basics".to_string(),
        resource_type: ResourceType::Course,
        platform: "Udemy".to_string(),
        ..NewGoal::default()
    };
    let created = store_for(&server).create(&goal).unwrap();
    mock.assert();
    assert_eq!(created.id, 5);
}

#[test]
fn update_puts_only_the_touched_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/goals/7")
            .json_body(json!({"hours_spent": 4.5}));
        then.status(200).json_body(goal_json(7, "Rust", "started"));
    });

    let patch = GoalPatch {
        hours_spent: Some(4.5),
        ..GoalPatch::default()
    };
    let updated = store_for(&server).update(7, &patch).unwrap();
    mock.assert();
    assert_eq!(updated.id, 7);
}

#[test]
fn update_of_missing_goal_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/api/goals/42");
        then.status(404).json_body(json!({"detail": "Goal not found"}));
    });

    let patch = GoalPatch {
        progress_status: Some(ProgressStatus::Completed),
        ..GoalPatch::default()
    };
    let result = store_for(&server).update(42, &patch);
    assert!(matches!(result, Err(SksError::GoalNotFound(42))));
}

#[test]
fn delete_sends_a_delete_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/goals/3");
        then.status(204);
    });

    store_for(&server).delete(3).unwrap();
    mock.assert();
}

#[test]
fn server_errors_map_to_transport_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/goals/");
        then.status(500).json_body(json!({"detail": "boom"}));
    });

    let result = store_for(&server).list_all();
    assert!(matches!(result, Err(SksError::Transport { op: "list goals", .. })));
}

#[test]
fn dashboard_decodes_the_server_aggregate() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard");
        then.status(200).json_body(json!({
            "total_goals": 4,
            "completed_goals": 1,
            "in_progress_goals": 2,
            "total_hours": 12.5,
            "completion_rate": 25.0,
            "category_breakdown": [{"name": "course", "count": 4}]
        }));
    });

    let summary = store_for(&server).dashboard().unwrap();
    assert_eq!(summary.total_goals, 4);
    assert_eq!(summary.category_breakdown[0].name, "course");
}

#[test]
fn dashboard_without_the_marker_field_is_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard");
        then.status(200).json_body(json!({"completed_goals": 3}));
    });

    let result = store_for(&server).dashboard();
    assert!(matches!(result, Err(SksError::DashboardUnavailable(_))));
}

#[test]
fn dashboard_404_is_unavailable_not_transport() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard");
        then.status(404);
    });

    let result = store_for(&server).dashboard();
    assert!(matches!(result, Err(SksError::DashboardUnavailable(_))));
}

#[test]
fn fetch_payload_downgrades_a_missing_dashboard_silently() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/goals/");
        then.status(200).json_body(json!([goal_json(1, "Rust", "started")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard");
        then.status(404);
    });

    let payload = fetch_payload(&store_for(&server)).unwrap();
    assert_eq!(payload.goals.len(), 1);
    assert!(payload.summary.is_none());
}

#[test]
fn fetch_payload_fails_when_the_list_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/goals/");
        then.status(503);
    });

    let result = fetch_payload(&store_for(&server));
    assert!(matches!(result, Err(SksError::Transport { .. })));
}
