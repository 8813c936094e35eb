//! Error types for the data access client.

/// Why a login attempt failed.
///
/// Login never falls back to local data, so every variant reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The backend answered with a non-success status.
    #[error("Invalid email or password")]
    InvalidCredentials { status: u16 },

    /// The backend could not be reached.
    #[error("Unable to reach the authentication service")]
    Unreachable(#[source] reqwest::Error),

    /// The backend answered 2xx with a body that is not a login response.
    #[error("Unexpected response from the authentication service")]
    MalformedResponse(#[source] reqwest::Error),
}

/// Error type for data access operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Authentication(#[from] AuthError),

    /// The requested record exists in neither source.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Network-level failure, or a response body that failed to decode.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Remote API returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The bundled offline dataset failed to load.
    #[error("Fallback dataset is invalid: {0}")]
    Dataset(#[from] serde_json::Error),
}

impl ClientError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Remote failures are recovered by the fallback path; everything else
    /// reaches the caller.
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ClientError::not_found("Student", "42");
        assert_eq!(err.to_string(), "Student not found: 42");
        assert!(err.is_not_found());
        assert!(!err.is_remote_failure());
    }

    #[test]
    fn test_status_is_remote_failure() {
        let err = ClientError::Status {
            status: 503,
            url: "http://localhost/api/students".to_string(),
        };
        assert!(err.is_remote_failure());
        assert_eq!(
            err.to_string(),
            "Remote API returned 503 for http://localhost/api/students"
        );
    }

    #[test]
    fn test_auth_error_is_user_displayable() {
        let err = ClientError::from(AuthError::InvalidCredentials { status: 401 });
        assert_eq!(err.to_string(), "Invalid email or password");
    }
}
