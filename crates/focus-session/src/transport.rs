use async_trait::async_trait;
use focus_client::{AuthError, DataClient};
use focus_models::LoginResponse;

/// Exchanges credentials for a user and access token.
#[async_trait]
pub trait AuthTransport: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError>;
}

#[async_trait]
impl AuthTransport for DataClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AuthError> {
        DataClient::login(self, email, password).await
    }
}
