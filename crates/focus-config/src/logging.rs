use std::env;
use std::path::PathBuf;

/// Logging configuration.
///
/// # Environment Variables
///
/// - `LOG_LEVEL`: Default level for this application's targets (default: `info`)
/// - `FOCUS_LOG_DIR`: Directory for rolling log files (default: `storage/logs`)
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("FOCUS_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("storage/logs")),
        }
    }
}
