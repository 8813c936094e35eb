use std::env;
use std::path::PathBuf;

/// Session persistence configuration.
///
/// # Environment Variables
///
/// - `FOCUS_SESSION_DIR`: Directory holding the persisted session (default: `storage/session`)
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub storage_dir: PathBuf,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            storage_dir: env::var("FOCUS_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("storage/session")),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("storage/session"),
        }
    }
}
