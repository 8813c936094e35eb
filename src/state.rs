use std::sync::Arc;

use focus_client::{ClientError, DataClient};
use focus_config::{ApiConfig, SessionConfig};
use focus_core::{FileStore, KeyValueStore};
use focus_models::AccessToken;
use focus_session::SessionManager;

/// Everything a command needs, built once at startup and passed by
/// reference.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub api_config: ApiConfig,
    pub session_config: SessionConfig,
    pub client: DataClient,
    pub session: Arc<SessionManager>,
}

impl AppContext {
    /// Session persisted as files under `session_config.storage_dir`.
    pub fn new(api_config: ApiConfig, session_config: SessionConfig) -> Result<Self, ClientError> {
        let store = Arc::new(FileStore::new(session_config.storage_dir.clone()));
        Self::with_store(api_config, session_config, store)
    }

    pub fn with_store(
        api_config: ApiConfig,
        session_config: SessionConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ClientError> {
        let client = DataClient::new(&api_config)?;
        let session = Arc::new(SessionManager::new(Arc::new(client.clone()), store));

        Ok(Self {
            api_config,
            session_config,
            client,
            session,
        })
    }

    /// The current credential, if someone is logged in.
    pub fn credential(&self) -> Option<AccessToken> {
        self.session.access_token()
    }
}

pub fn init_app_context() -> Result<AppContext, ClientError> {
    AppContext::new(ApiConfig::from_env(), SessionConfig::from_env())
}
