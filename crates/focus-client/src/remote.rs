//! HTTP access to the Focus backend.

use async_trait::async_trait;
use focus_config::ApiConfig;
use focus_models::{AccessToken, ActivityItem, DashboardStats, LoginRequest, LoginResponse};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AuthError, ClientError};
use crate::resource::Resource;
use crate::search::effective_query;
use crate::source::DataSource;

/// Client for the remote API. Cheap to clone.
#[derive(Clone)]
pub struct RemoteSource {
    http: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for RemoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSource")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RemoteSource {
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Exchange email and password for a credential via `POST /auth/login`.
    ///
    /// Never retried and never answered from local data.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        let url = self.url("auth/login");
        debug!(http.url = %url, "Sending login request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(AuthError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::InvalidCredentials {
                status: status.as_u16(),
            });
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(AuthError::MalformedResponse)
    }

    /// View of the API that sends `token` as a bearer credential.
    pub fn authorized<'a>(&'a self, token: &'a AccessToken) -> AuthorizedRemote<'a> {
        AuthorizedRemote {
            remote: self,
            token,
        }
    }
}

/// The remote API bound to one credential.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizedRemote<'a> {
    remote: &'a RemoteSource,
    token: &'a AccessToken,
}

impl AuthorizedRemote<'_> {
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!(http.method = %method, http.url = %url, "Sending API request");
        self.remote
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.token.bearer())
    }

    async fn checked(
        &self,
        request: RequestBuilder,
        url: String,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: String,
    ) -> Result<T, ClientError> {
        let response = self.checked(request, url).await?;
        Ok(response.json::<T>().await?)
    }

    fn entity_url<R: Resource>(&self, id: &R::Id) -> String {
        self.remote.url(&format!("{}/{}", R::PATH, id))
    }
}

#[async_trait]
impl<'a> DataSource for AuthorizedRemote<'a> {
    async fn list<R: Resource>(&self, query: Option<&str>) -> Result<Vec<R::Entity>, ClientError> {
        let url = self.remote.url(R::PATH);
        let mut request = self.request(Method::GET, &url);
        if let Some(query) = effective_query(query) {
            request = request.query(&[("query", query)]);
        }
        self.fetch(request, url).await
    }

    async fn get<R: Resource>(&self, id: &R::Id) -> Result<Option<R::Entity>, ClientError> {
        let url = self.entity_url::<R>(id);
        let request = self.request(Method::GET, &url);
        self.fetch(request, url).await.map(Some)
    }

    async fn create<R: Resource>(&self, dto: R::Create) -> Result<R::Entity, ClientError> {
        let url = self.remote.url(R::PATH);
        let request = self.request(Method::POST, &url).json(&dto);
        self.fetch(request, url).await
    }

    async fn update<R: Resource>(
        &self,
        id: &R::Id,
        dto: R::Update,
    ) -> Result<R::Entity, ClientError> {
        let url = self.entity_url::<R>(id);
        let request = self.request(Method::PUT, &url).json(&dto);
        self.fetch(request, url).await
    }

    async fn delete<R: Resource>(&self, id: &R::Id) -> Result<bool, ClientError> {
        let url = self.entity_url::<R>(id);
        let request = self.request(Method::DELETE, &url);
        self.checked(request, url).await?;
        Ok(true)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        let url = self.remote.url("dashboard/stats");
        let request = self.request(Method::GET, &url);
        self.fetch(request, url).await
    }

    async fn recent_activity(&self, limit: usize) -> Result<Vec<ActivityItem>, ClientError> {
        let url = self.remote.url("dashboard/activity");
        let request = self.request(Method::GET, &url).query(&[("limit", limit)]);
        self.fetch(request, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_with_single_slash() {
        let remote = RemoteSource::new(&ApiConfig::with_base_url("http://localhost:9090/api/"))
            .unwrap();
        assert_eq!(remote.base_url(), "http://localhost:9090/api");
        assert_eq!(remote.url("students"), "http://localhost:9090/api/students");
    }

    #[test]
    fn test_entity_url() {
        let remote = RemoteSource::new(&ApiConfig::with_base_url("http://localhost:9090/api"))
            .unwrap();
        let token = AccessToken::new("abc");
        let authorized = remote.authorized(&token);
        let id = focus_models::ClassId::from("7");
        assert_eq!(
            authorized.entity_url::<crate::resource::Classes>(&id),
            "http://localhost:9090/api/classes/7"
        );
    }

    #[test]
    fn test_authorized_debug_redacts_token() {
        let remote = RemoteSource::new(&ApiConfig::default()).unwrap();
        let token = AccessToken::new("secret-token");
        let rendered = format!("{:?}", remote.authorized(&token));
        assert!(rendered.contains("localhost:9090"));
        assert!(!rendered.contains("secret-token"));
    }
}
