//! The data access facade used by the rest of the application.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use focus_config::{ApiConfig, SimulatedLatency};
use focus_models::{
    AccessToken, ActivityItem, Class, ClassId, CreateClassDto, CreateStudentDto,
    CreateTeacherDto, DashboardStats, LoginRequest, LoginResponse, Student, StudentId, Teacher,
    TeacherId, UpdateClassDto, UpdateStudentDto, UpdateTeacherDto,
};
use tracing::{info, instrument};

use crate::dataset::FallbackDataset;
use crate::error::{AuthError, ClientError};
use crate::fallback::FallbackSource;
use crate::policy::{Sourced, with_fallback};
use crate::remote::RemoteSource;
use crate::resource::{Classes, Resource, Students, Teachers};
use crate::source::DataSource;

/// Number of activity items returned when the caller gives no limit.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 5;

/// Typed access to every entity, with offline fallback.
///
/// With a credential each call goes to the remote API and falls back to the
/// bundled dataset on any transport or status failure. Without one the remote
/// is skipped: the call waits the configured simulated latency and answers
/// from the dataset.
///
/// Cheap to clone; clones share the HTTP connection pool and the dataset.
#[derive(Debug, Clone)]
pub struct DataClient {
    remote: RemoteSource,
    fallback: FallbackSource,
    latency: SimulatedLatency,
}

impl DataClient {
    /// Client over the bundled dataset.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built or the bundled dataset does
    /// not parse.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::with_dataset(config, FallbackDataset::bundled()?)
    }

    pub fn with_dataset(config: &ApiConfig, dataset: FallbackDataset) -> Result<Self, ClientError> {
        Ok(Self {
            remote: RemoteSource::new(config)?,
            fallback: FallbackSource::new(Arc::new(dataset)),
            latency: config.latency,
        })
    }

    pub fn dataset(&self) -> &FallbackDataset {
        self.fallback.dataset()
    }

    pub fn base_url(&self) -> &str {
        self.remote.base_url()
    }

    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.remote.login(&request).await?;
        info!(user.id = %response.user.id, user.role = %response.user.role, "Login succeeded");
        Ok(response)
    }

    async fn offline<T, Fut>(&self, delay: Duration, answer: Fut) -> Result<Sourced<T>, ClientError>
    where
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        answer.await.map(Sourced::fallback)
    }

    #[instrument(skip(self, credential), fields(resource = R::PATH))]
    pub async fn list<R: Resource>(
        &self,
        credential: Option<&AccessToken>,
        query: Option<&str>,
    ) -> Result<Sourced<Vec<R::Entity>>, ClientError> {
        let Some(token) = credential else {
            return self
                .offline(R::list_latency(&self.latency), self.fallback.list::<R>(query))
                .await;
        };
        let remote = self.remote.authorized(token);
        with_fallback("list", remote.list::<R>(query), || {
            self.fallback.list::<R>(query)
        })
        .await
    }

    #[instrument(skip(self, credential), fields(resource = R::PATH))]
    pub async fn get<R: Resource>(
        &self,
        id: &R::Id,
        credential: Option<&AccessToken>,
    ) -> Result<Sourced<Option<R::Entity>>, ClientError> {
        let Some(token) = credential else {
            return self.offline(self.latency.get, self.fallback.get::<R>(id)).await;
        };
        let remote = self.remote.authorized(token);
        with_fallback("get", remote.get::<R>(id), || self.fallback.get::<R>(id)).await
    }

    #[instrument(skip(self, dto, credential), fields(resource = R::PATH))]
    pub async fn create<R: Resource>(
        &self,
        dto: R::Create,
        credential: Option<&AccessToken>,
    ) -> Result<Sourced<R::Entity>, ClientError> {
        let Some(token) = credential else {
            return self
                .offline(self.latency.create, self.fallback.create::<R>(dto))
                .await;
        };
        let remote = self.remote.authorized(token);
        with_fallback("create", remote.create::<R>(dto.clone()), || {
            self.fallback.create::<R>(dto)
        })
        .await
    }

    #[instrument(skip(self, dto, credential), fields(resource = R::PATH))]
    pub async fn update<R: Resource>(
        &self,
        id: &R::Id,
        dto: R::Update,
        credential: Option<&AccessToken>,
    ) -> Result<Sourced<R::Entity>, ClientError> {
        let Some(token) = credential else {
            return self
                .offline(self.latency.update, self.fallback.update::<R>(id, dto))
                .await;
        };
        let remote = self.remote.authorized(token);
        with_fallback("update", remote.update::<R>(id, dto.clone()), || {
            self.fallback.update::<R>(id, dto)
        })
        .await
    }

    #[instrument(skip(self, credential), fields(resource = R::PATH))]
    pub async fn delete<R: Resource>(
        &self,
        id: &R::Id,
        credential: Option<&AccessToken>,
    ) -> Result<Sourced<bool>, ClientError> {
        let Some(token) = credential else {
            return self
                .offline(self.latency.delete, self.fallback.delete::<R>(id))
                .await;
        };
        let remote = self.remote.authorized(token);
        with_fallback("delete", remote.delete::<R>(id), || {
            self.fallback.delete::<R>(id)
        })
        .await
    }

    #[instrument(skip(self, credential))]
    pub async fn dashboard_stats(
        &self,
        credential: Option<&AccessToken>,
    ) -> Result<Sourced<DashboardStats>, ClientError> {
        let Some(token) = credential else {
            return self
                .offline(self.latency.stats, self.fallback.dashboard_stats())
                .await;
        };
        let remote = self.remote.authorized(token);
        with_fallback("dashboard_stats", remote.dashboard_stats(), || {
            self.fallback.dashboard_stats()
        })
        .await
    }

    #[instrument(skip(self, credential))]
    pub async fn recent_activity(
        &self,
        credential: Option<&AccessToken>,
        limit: usize,
    ) -> Result<Sourced<Vec<ActivityItem>>, ClientError> {
        let Some(token) = credential else {
            return self
                .offline(self.latency.activity, self.fallback.recent_activity(limit))
                .await;
        };
        let remote = self.remote.authorized(token);
        with_fallback("recent_activity", remote.recent_activity(limit), || {
            self.fallback.recent_activity(limit)
        })
        .await
    }

    // Students

    pub async fn get_students(
        &self,
        credential: Option<&AccessToken>,
        query: Option<&str>,
    ) -> Result<Vec<Student>, ClientError> {
        self.list::<Students>(credential, query)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn get_student_by_id(
        &self,
        id: &StudentId,
        credential: Option<&AccessToken>,
    ) -> Result<Option<Student>, ClientError> {
        self.get::<Students>(id, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn create_student(
        &self,
        dto: CreateStudentDto,
        credential: Option<&AccessToken>,
    ) -> Result<Student, ClientError> {
        self.create::<Students>(dto, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn update_student(
        &self,
        id: &StudentId,
        dto: UpdateStudentDto,
        credential: Option<&AccessToken>,
    ) -> Result<Student, ClientError> {
        self.update::<Students>(id, dto, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn delete_student(
        &self,
        id: &StudentId,
        credential: Option<&AccessToken>,
    ) -> Result<bool, ClientError> {
        self.delete::<Students>(id, credential)
            .await
            .map(Sourced::into_inner)
    }

    // Teachers

    pub async fn get_teachers(
        &self,
        credential: Option<&AccessToken>,
        query: Option<&str>,
    ) -> Result<Vec<Teacher>, ClientError> {
        self.list::<Teachers>(credential, query)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn get_teacher_by_id(
        &self,
        id: &TeacherId,
        credential: Option<&AccessToken>,
    ) -> Result<Option<Teacher>, ClientError> {
        self.get::<Teachers>(id, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn create_teacher(
        &self,
        dto: CreateTeacherDto,
        credential: Option<&AccessToken>,
    ) -> Result<Teacher, ClientError> {
        self.create::<Teachers>(dto, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn update_teacher(
        &self,
        id: &TeacherId,
        dto: UpdateTeacherDto,
        credential: Option<&AccessToken>,
    ) -> Result<Teacher, ClientError> {
        self.update::<Teachers>(id, dto, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn delete_teacher(
        &self,
        id: &TeacherId,
        credential: Option<&AccessToken>,
    ) -> Result<bool, ClientError> {
        self.delete::<Teachers>(id, credential)
            .await
            .map(Sourced::into_inner)
    }

    // Classes

    pub async fn get_classes(
        &self,
        credential: Option<&AccessToken>,
        query: Option<&str>,
    ) -> Result<Vec<Class>, ClientError> {
        self.list::<Classes>(credential, query)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn get_class_by_id(
        &self,
        id: &ClassId,
        credential: Option<&AccessToken>,
    ) -> Result<Option<Class>, ClientError> {
        self.get::<Classes>(id, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn create_class(
        &self,
        dto: CreateClassDto,
        credential: Option<&AccessToken>,
    ) -> Result<Class, ClientError> {
        self.create::<Classes>(dto, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn update_class(
        &self,
        id: &ClassId,
        dto: UpdateClassDto,
        credential: Option<&AccessToken>,
    ) -> Result<Class, ClientError> {
        self.update::<Classes>(id, dto, credential)
            .await
            .map(Sourced::into_inner)
    }

    pub async fn delete_class(
        &self,
        id: &ClassId,
        credential: Option<&AccessToken>,
    ) -> Result<bool, ClientError> {
        self.delete::<Classes>(id, credential)
            .await
            .map(Sourced::into_inner)
    }

    // Dashboard

    pub async fn get_dashboard_stats(
        &self,
        credential: Option<&AccessToken>,
    ) -> Result<DashboardStats, ClientError> {
        self.dashboard_stats(credential)
            .await
            .map(Sourced::into_inner)
    }

    /// Most recent activity, `DEFAULT_ACTIVITY_LIMIT` items unless `limit`
    /// says otherwise.
    pub async fn get_recent_activity(
        &self,
        credential: Option<&AccessToken>,
        limit: Option<usize>,
    ) -> Result<Vec<ActivityItem>, ClientError> {
        self.recent_activity(credential, limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT))
            .await
            .map(Sourced::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Origin;

    fn offline_client() -> DataClient {
        // Nothing listens on the discard port; no credential means it is never dialed.
        DataClient::new(&ApiConfig::with_base_url("http://127.0.0.1:9/api")).unwrap()
    }

    #[tokio::test]
    async fn test_no_credential_answers_from_dataset() {
        let client = offline_client();
        let sourced = client.list::<Students>(None, None).await.unwrap();
        assert_eq!(sourced.origin, Origin::Fallback);
        assert_eq!(sourced.value.len(), 5);
        assert_eq!(sourced.value[0].name, "Emma Wilson");
    }

    #[tokio::test]
    async fn test_default_activity_limit() {
        let client = offline_client();
        let items = client.get_recent_activity(None, None).await.unwrap();
        assert_eq!(items.len(), DEFAULT_ACTIVITY_LIMIT);
        let items = client.get_recent_activity(None, Some(2)).await.unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_class_search_uses_teacher_name() {
        let client = offline_client();
        let classes = client.get_classes(None, Some("john smith")).await.unwrap();
        assert!(!classes.is_empty());
        assert!(classes.iter().all(|c| c.teacher_name == "John Smith"));
    }

    #[tokio::test]
    async fn test_offline_path_waits_simulated_latency() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:9/api")
            .with_latency(SimulatedLatency::uniform(Duration::from_millis(40)));
        let client = DataClient::new(&config).unwrap();

        let started = std::time::Instant::now();
        client.get_dashboard_stats(None).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(40));
    }
}
