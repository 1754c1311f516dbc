//! Deserialization of the backend's snake_case entity payloads.

use chrono::{TimeZone, Utc};
use deck_core::entities::{Comment, Identified, Task};
use pretty_assertions::assert_eq;

#[test]
fn task_with_all_fields() {
    let json = r#"{
        "id": "1",
        "account_id": "account-123",
        "title": "New Task",
        "description": "New Description",
        "active": true,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T08:30:00Z"
    }"#;

    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.id(), "1");
    assert_eq!(task.account_id, "account-123");
    assert_eq!(task.title, "New Task");
    assert_eq!(task.description, "New Description");
    assert_eq!(
        task.created_at,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(
        task.updated_at,
        Some(Utc.with_ymd_and_hms(2024, 1, 2, 8, 30, 0).unwrap())
    );
}

#[test]
fn task_without_optional_fields() {
    let json = r#"{"id": "t-9", "account_id": "a-1", "title": "Bare"}"#;

    let task: Task = serde_json::from_str(json).unwrap();
    assert!(task.active);
    assert!(task.description.is_empty());
    assert!(task.created_at.is_none());
    assert!(task.updated_at.is_none());
}

#[test]
fn task_requires_account_id() {
    let json = r#"{"id": "t-9", "title": "Orphan"}"#;
    assert!(serde_json::from_str::<Task>(json).is_err());
}

#[test]
fn comment_with_all_fields() {
    let json = r#"{
        "id": "c-1",
        "task_id": "t-1",
        "account_id": "a-1",
        "content": "Looks good",
        "active": false,
        "created_at": "2024-03-05T10:00:00Z",
        "updated_at": "2024-03-05T10:00:00Z"
    }"#;

    let comment: Comment = serde_json::from_str(json).unwrap();
    assert_eq!(comment.id(), "c-1");
    assert_eq!(comment.task_id, "t-1");
    assert_eq!(comment.content, "Looks good");
    assert!(!comment.active);
}

#[test]
fn task_serializes_with_snake_case_keys() {
    let task = Task {
        id: "1".into(),
        account_id: "a".into(),
        title: "T".into(),
        description: String::new(),
        active: true,
        created_at: None,
        updated_at: None,
    };

    let value = serde_json::to_value(&task).unwrap();
    assert!(value.get("account_id").is_some());
    assert!(value.get("accountId").is_none());
    let recovered: Task = serde_json::from_value(value).unwrap();
    assert_eq!(recovered, task);
}
