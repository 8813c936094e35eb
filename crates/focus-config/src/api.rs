//! Remote API configuration.
//!
//! Holds the backend location plus the delays the offline path waits before
//! answering, so that pages keep showing their loading state even when no
//! backend is involved.

use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9090/api";

/// Remote API configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `FOCUS_API_BASE_URL`: Base URL of the remote API (default: `http://localhost:9090/api`)
/// - `FOCUS_API_TIMEOUT_SECS`: Per-request timeout in seconds (default: none)
/// - `FOCUS_SIMULATED_LATENCY_MS`: Overrides every offline delay, `0` disables them
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:9090/api`.
    pub base_url: String,

    /// Request timeout. `None` means a hung backend blocks the caller
    /// indefinitely.
    pub request_timeout: Option<Duration>,

    /// Delays applied on the offline path when no credential is available.
    pub latency: SimulatedLatency,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("FOCUS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = parse_env::<u64>("FOCUS_API_TIMEOUT_SECS").map(Duration::from_secs);

        let latency = parse_env::<u64>("FOCUS_SIMULATED_LATENCY_MS")
            .map(|ms| SimulatedLatency::uniform(Duration::from_millis(ms)))
            .unwrap_or_default();

        Self {
            base_url,
            request_timeout,
            latency,
        }
    }

    /// Configuration pointing at `base_url` with no timeout and no simulated
    /// latency. Convenient for tests and tools.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: None,
            latency: SimulatedLatency::none(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            latency: SimulatedLatency::default(),
        }
    }
}

/// Per-operation delays for the offline path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub list: Duration,
    pub list_classes: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub stats: Duration,
    pub activity: Duration,
}

impl SimulatedLatency {
    /// The same delay for every operation.
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            list: delay,
            list_classes: delay,
            get: delay,
            create: delay,
            update: delay,
            delete: delay,
            stats: delay,
            activity: delay,
        }
    }

    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(700),
            list_classes: Duration::from_millis(600),
            get: Duration::from_millis(500),
            create: Duration::from_millis(800),
            update: Duration::from_millis(700),
            delete: Duration::from_millis(600),
            stats: Duration::from_millis(500),
            activity: Duration::from_millis(600),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(env.key = %key, env.value = %raw, "Ignoring unparsable environment value");
            None
        }
    }
}
