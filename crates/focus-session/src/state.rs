use focus_models::{AccessToken, User};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Persisted state has not been read yet.
    Restoring,
    Unauthenticated,
    /// Logged in, but the user has not confirmed which role to act as.
    AwaitingRole,
    Established,
}

/// Snapshot of the current session.
///
/// `user` and `access_token` are either both present or both absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<AccessToken>,
    pub loading: bool,
    pub phase: SessionPhase,
}

impl Session {
    pub(crate) fn restoring() -> Self {
        Self {
            user: None,
            access_token: None,
            loading: true,
            phase: SessionPhase::Restoring,
        }
    }

    pub(crate) fn signed_out() -> Self {
        Self {
            user: None,
            access_token: None,
            loading: false,
            phase: SessionPhase::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::restoring()
    }
}
