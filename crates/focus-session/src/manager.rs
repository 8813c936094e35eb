//! Session lifecycle: restore, login, role selection and logout.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use focus_client::AuthError;
use focus_core::KeyValueStore;
use focus_models::{AccessToken, User, UserRole};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::state::{Session, SessionPhase};
use crate::transport::AuthTransport;

/// Storage key of the JSON-encoded user.
pub const USER_KEY: &str = "focus_user";

/// Storage key of the raw access token.
pub const TOKEN_KEY: &str = "focus_token";

/// Owns the current session and keeps it in sync with persistent storage.
///
/// Reads are cheap snapshots. Every change is broadcast to subscribers.
/// Storage failures never fail an operation: they are logged and the
/// in-memory session stays authoritative.
pub struct SessionManager {
    transport: Arc<dyn AuthTransport>,
    store: Arc<dyn KeyValueStore>,
    state: watch::Sender<Session>,
    restored: AtomicBool,
    logins_in_flight: AtomicUsize,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(transport: Arc<dyn AuthTransport>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            transport,
            store,
            state: watch::Sender::new(Session::restoring()),
            restored: AtomicBool::new(false),
            logins_in_flight: AtomicUsize::new(0),
        }
    }

    /// Load the persisted session. Only the first call does anything.
    ///
    /// [`login`](Self::login) restores first, so a later call never
    /// overwrites an identity established by a login.
    pub fn restore(&self) {
        if self.restored.swap(true, Ordering::SeqCst) {
            return;
        }

        let user = self.read_user();
        let token = self.read(TOKEN_KEY);

        let mut session = match (user, token) {
            (Some(user), Some(token)) => {
                info!(user.id = %user.id, "Restored persisted session");
                Session {
                    user: Some(user),
                    access_token: Some(AccessToken::new(token)),
                    loading: false,
                    phase: SessionPhase::Established,
                }
            }
            (Some(_), None) => {
                warn!("Persisted user has no token, discarding");
                self.remove(USER_KEY);
                Session::signed_out()
            }
            (None, Some(_)) => {
                warn!("Persisted token has no user, discarding");
                self.remove(TOKEN_KEY);
                Session::signed_out()
            }
            (None, None) => {
                debug!("No persisted session");
                Session::signed_out()
            }
        };
        session.loading = self.login_pending();

        self.state.send_replace(session);
    }

    /// Authenticate and, on success, replace the current identity.
    ///
    /// On failure the current identity is left as it was. Concurrent logins
    /// each get their own result; the last one to finish owns the session.
    /// `loading` stays set until every login in flight has finished.
    #[instrument(skip_all)]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.restore();

        self.logins_in_flight.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|session| session.loading = true);

        let result = self.transport.login(email, password).await;
        self.logins_in_flight.fetch_sub(1, Ordering::SeqCst);

        match result {
            Ok(response) => {
                let user = response.user;
                let token = response.access_token;
                self.persist_user(&user);
                self.persist(TOKEN_KEY, token.as_str());

                self.state.send_modify(|session| {
                    session.user = Some(user.clone());
                    session.access_token = Some(token);
                    session.loading = self.login_pending();
                    session.phase = SessionPhase::AwaitingRole;
                });
                info!(user.id = %user.id, user.role = %user.role, "User logged in");
                Ok(user)
            }
            Err(err) => {
                self.state
                    .send_modify(|session| session.loading = self.login_pending());
                warn!(error = %err, "Login failed");
                Err(err)
            }
        }
    }

    /// Clear the session from memory and storage. Safe to call at any time.
    pub fn logout(&self) {
        self.state.send_replace(Session {
            loading: self.login_pending(),
            ..Session::signed_out()
        });
        self.remove(USER_KEY);
        self.remove(TOKEN_KEY);
        info!("User logged out");
    }

    /// Change the role the current user acts as. Returns `false` without
    /// doing anything when nobody is logged in.
    ///
    /// The credential is left untouched.
    pub fn update_role(&self, role: UserRole) -> bool {
        let mut updated = None;
        self.state.send_if_modified(|session| {
            let Some(user) = session.user.as_mut() else {
                return false;
            };
            user.role = role;
            session.phase = SessionPhase::Established;
            updated = Some(user.clone());
            true
        });

        match updated {
            Some(user) => {
                self.persist_user(&user);
                info!(user.id = %user.id, user.role = %role, "User role updated");
                true
            }
            None => {
                debug!(user.role = %role, "Ignoring role change without a session");
                false
            }
        }
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn access_token(&self) -> Option<AccessToken> {
        self.state.borrow().access_token.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver notified on every session change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    fn login_pending(&self) -> bool {
        self.logins_in_flight.load(Ordering::SeqCst) > 0
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(storage.key = %key, error = %e, "Failed to read session state");
                None
            }
        }
    }

    fn read_user(&self) -> Option<User> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(storage.key = USER_KEY, error = %e, "Discarding corrupted persisted user");
                self.remove(USER_KEY);
                None
            }
        }
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(storage.key = %key, error = %e, "Failed to persist session state");
        }
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.persist(USER_KEY, &json),
            Err(e) => warn!(error = %e, "Failed to encode user for persistence"),
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(storage.key = %key, error = %e, "Failed to clear session state");
        }
    }
}
