use axum::Router;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use chrono::NaiveDate;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use focus::focus_client::{DataClient, FallbackDataset};
use focus::focus_config::ApiConfig;
use focus::focus_models::{AccessToken, Student, StudentId, StudentStatus, User, UserId, UserRole};

pub const TEST_TOKEN: &str = "test-access-token";

#[allow(dead_code)]
pub fn token() -> AccessToken {
    AccessToken::new(TEST_TOKEN)
}

/// Serve `router` on an ephemeral local port and return the API base URL.
///
/// Routes are expected under `/api`.
pub async fn spawn_api(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

/// A base URL nothing is listening on.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

/// An API that answers every request with 500.
#[allow(dead_code)]
pub async fn spawn_failing_api() -> String {
    let router = Router::new().fallback(|| async {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    });
    spawn_api(router).await
}

/// Client with no simulated latency.
pub fn client_for(base_url: &str) -> DataClient {
    DataClient::new(&ApiConfig::with_base_url(base_url)).unwrap()
}

#[allow(dead_code)]
pub fn dataset() -> FallbackDataset {
    FallbackDataset::bundled().unwrap()
}

#[allow(dead_code)]
pub fn is_authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {}", TEST_TOKEN);
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) == Some(expected.as_str())
}

#[allow(dead_code)]
pub fn fake_student(id: &str) -> Student {
    Student {
        id: StudentId::from(id),
        name: Name().fake(),
        email: SafeEmail().fake(),
        grade: "10th".to_string(),
        enrollment_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
        parent_id: None,
        avatar: None,
        address: None,
        phone_number: None,
        date_of_birth: None,
        status: StudentStatus::Active,
        attendance: Some((60u8..100).fake::<u8>()),
        average_grade: Some((50u8..100).fake::<u8>()),
    }
}

#[allow(dead_code)]
pub fn fake_user(role: UserRole) -> User {
    User {
        id: UserId::generate(),
        name: Name().fake(),
        email: SafeEmail().fake(),
        role,
        avatar: None,
    }
}
