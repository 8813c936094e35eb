mod common;

use std::time::{Duration, Instant};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::Json;
use axum::Router;
use chrono::NaiveTime;
use common::{client_for, dataset, spawn_api, token, unreachable_base_url};
use focus::focus_client::{Classes, DataClient, Origin};
use focus::focus_config::{ApiConfig, SimulatedLatency};
use focus::focus_models::schedule::{
    filter_by_subject, schedule_summary, subjects, teacher_schedule, weekly_schedule,
};
use focus::focus_models::{ClassId, ClassSchedule, CreateClassDto, TeacherId, UpdateClassDto, Weekday};
use tokio_test::assert_err;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[tokio::test]
async fn test_class_search_matches_teacher_name() {
    let client = client_for(&unreachable_base_url());

    let classes = client.get_classes(None, Some("garcia")).await.unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].name, "Biology 101");
}

#[tokio::test]
async fn test_class_list_uses_its_own_latency() {
    let latency = SimulatedLatency {
        list: Duration::from_millis(400),
        list_classes: Duration::from_millis(20),
        ..SimulatedLatency::none()
    };
    let config = ApiConfig::with_base_url(unreachable_base_url()).with_latency(latency);
    let client = DataClient::new(&config).unwrap();

    let started = Instant::now();
    client.get_classes(None, None).await.unwrap();
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(20));
    assert!(elapsed < Duration::from_millis(400));
}

#[tokio::test]
async fn test_create_class_offline_keeps_teacher_and_schedule() {
    let client = client_for(&unreachable_base_url());
    let teacher = dataset().teachers[2].clone();
    let dto = CreateClassDto::taught_by(
        "Astronomy",
        "Physics",
        &teacher,
        vec![ClassSchedule {
            day: Weekday::Friday,
            start_time: time(13, 0),
            end_time: time(14, 30),
            room: "Observatory".to_string(),
        }],
    );

    let class = client.create_class(dto, None).await.unwrap();
    assert_eq!(class.teacher_id, teacher.id);
    assert_eq!(class.teacher_name, "Robert Chen");
    assert_eq!(class.student_count, 0);
    assert!(class.is_schedulable());
}

#[tokio::test]
async fn test_reassign_class_offline() {
    let client = client_for(&unreachable_base_url());
    let teacher = dataset().teachers[4].clone();
    let dto = UpdateClassDto::default().with_teacher(&teacher);

    let class = client
        .update_class(&ClassId::from("1"), dto, None)
        .await
        .unwrap();
    assert_eq!(class.name, "Math 101");
    assert_eq!(class.teacher_name, "James Wilson");
}

#[tokio::test]
async fn test_delete_unknown_class_offline_is_not_found() {
    let client = client_for(&unreachable_base_url());

    assert!(client.delete_class(&ClassId::from("2"), None).await.unwrap());

    let err = assert_err!(client.delete_class(&ClassId::from("404"), None).await);
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Class not found: 404");
}

#[tokio::test]
async fn test_delete_class_remote() {
    let router = Router::new().route(
        "/api/classes/{id}",
        delete(|Path(id): Path<String>| async move {
            if id == "404" {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            }
        }),
    );
    let client = client_for(&spawn_api(router).await);
    let credential = token();

    let sourced = client
        .delete::<Classes>(&ClassId::from("77"), Some(&credential))
        .await
        .unwrap();
    assert_eq!(sourced.origin, Origin::Remote);

    // Remote 404 falls back, and the dataset does not know the id either
    let err = client
        .delete::<Classes>(&ClassId::from("404"), Some(&credential))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_schedule_views_over_fallback_classes() {
    let client = client_for(&unreachable_base_url());
    let classes = client.get_classes(None, None).await.unwrap();

    let slots = teacher_schedule(&classes, &TeacherId::from("2"));
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].day, Weekday::Monday);
    assert_eq!(slots[1].day, Weekday::Wednesday);

    let week = weekly_schedule(&classes);
    assert_eq!(week.keys().next(), Some(&Weekday::Monday));
    assert_eq!(week[&Weekday::Monday].len(), 3);

    assert_eq!(subjects(&classes).len(), 6);
    assert_eq!(filter_by_subject(&classes, Some("Physics")).len(), 1);
    assert_eq!(filter_by_subject(&classes, None).len(), 6);
    assert_eq!(schedule_summary(&classes[2]), "Monday, Wednesday, Friday");
}

#[tokio::test]
async fn test_remote_classes_with_loose_schedule_text_stay_remote() {
    let router = Router::new().route(
        "/api/classes",
        get(|| async {
            Json(serde_json::json!([
                {
                    "id": "c-1",
                    "name": "Robotics Club",
                    "subject": "Engineering",
                    "teacherId": "9",
                    "teacherName": "Ada Park",
                    "studentCount": 12,
                    "schedule": [
                        {"day": "monday", "startTime": "9:00 AM", "endTime": "10:30 AM", "room": "Lab 2"}
                    ]
                },
                {
                    "id": "c-2",
                    "name": "Debate",
                    "subject": "English",
                    "teacherId": "10",
                    "teacherName": "Omar Reyes",
                    "studentCount": 18,
                    "schedule": [
                        {"day": "THU", "startTime": "15:00:00", "endTime": "16:00", "room": "Hall"}
                    ]
                }
            ]))
        }),
    );
    let client = client_for(&spawn_api(router).await);

    let sourced = client.list::<Classes>(Some(&token()), None).await.unwrap();
    assert_eq!(sourced.origin, Origin::Remote);

    let classes = sourced.into_inner();
    let names: Vec<&str> = classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Robotics Club", "Debate"]);
    assert_eq!(classes[0].schedule[0].day, Weekday::Monday);
    assert_eq!(classes[0].schedule[0].start_time, time(9, 0));
    assert_eq!(classes[1].schedule[0].day, Weekday::Thursday);
    assert_eq!(schedule_summary(&classes[1]), "Thursday");
}
