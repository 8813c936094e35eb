mod common;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use common::{client_for, dataset, spawn_api, token, unreachable_base_url};
use focus::focus_client::{Origin, Teachers};
use focus::focus_models::{CreateTeacherDto, TeacherId, UpdateTeacherDto};
use serde_json::{Value, json};

fn new_teacher() -> CreateTeacherDto {
    CreateTeacherDto {
        name: "Grace Hopper".to_string(),
        email: "grace@focus.edu".to_string(),
        subject: "Computer Science".to_string(),
        avatar: None,
        phone_number: None,
        department: Some("Science".to_string()),
        qualification: None,
        join_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
    }
}

#[tokio::test]
async fn test_list_teachers_remote() {
    let router = Router::new().route(
        "/api/teachers",
        get(|| async { Json(dataset().teachers.into_iter().take(2).collect::<Vec<_>>()) }),
    );
    let client = client_for(&spawn_api(router).await);
    let credential = token();

    let sourced = client
        .list::<Teachers>(Some(&credential), None)
        .await
        .unwrap();
    assert_eq!(sourced.origin, Origin::Remote);
    assert_eq!(sourced.value.len(), 2);
}

#[tokio::test]
async fn test_offline_search_covers_department_and_qualification() {
    let client = client_for(&unreachable_base_url());

    let humanities = client
        .get_teachers(None, Some("humanities"))
        .await
        .unwrap();
    assert!(!humanities.is_empty());
    assert!(
        humanities
            .iter()
            .all(|t| t.department.as_deref() == Some("Humanities"))
    );

    let everyone = client.get_teachers(None, None).await.unwrap();
    assert_eq!(everyone.len(), 5);
}

#[tokio::test]
async fn test_malformed_remote_body_falls_back() {
    let router = Router::new().route(
        "/api/teachers",
        get(|| async { Json(json!({ "unexpected": true })) }),
    );
    let client = client_for(&spawn_api(router).await);
    let credential = token();

    let sourced = client
        .list::<Teachers>(Some(&credential), None)
        .await
        .unwrap();
    assert_eq!(sourced.origin, Origin::Fallback);
    assert_eq!(sourced.value.len(), 5);
}

#[tokio::test]
async fn test_create_teacher_offline_is_not_persisted() {
    let client = client_for(&unreachable_base_url());

    let created = client.create_teacher(new_teacher(), None).await.unwrap();
    assert_eq!(created.name, "Grace Hopper");

    let found = client.get_teacher_by_id(&created.id, None).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_update_teacher_remote_failure_merges_offline() {
    let router = Router::new().route(
        "/api/teachers/{id}",
        put(|Path(_id): Path<String>, Json(_body): Json<Value>| async {
            StatusCode::SERVICE_UNAVAILABLE
        }),
    );
    let client = client_for(&spawn_api(router).await);
    let credential = token();
    let dto = UpdateTeacherDto {
        phone_number: Some("555-0101".to_string()),
        ..Default::default()
    };

    let sourced = client
        .update::<Teachers>(&TeacherId::from("1"), dto, Some(&credential))
        .await
        .unwrap();
    assert_eq!(sourced.origin, Origin::Fallback);
    assert_eq!(sourced.value.name, "John Smith");
    assert_eq!(sourced.value.phone_number.as_deref(), Some("555-0101"));
}

#[tokio::test]
async fn test_delete_teacher_offline_always_succeeds() {
    let client = client_for(&unreachable_base_url());
    let credential = token();

    let sourced = client
        .delete::<Teachers>(&TeacherId::from("does-not-exist"), Some(&credential))
        .await
        .unwrap();
    assert_eq!(sourced.origin, Origin::Fallback);
    assert!(sourced.value);
}
