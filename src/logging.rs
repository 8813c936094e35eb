use anyhow::Context;
use focus_config::LoggingConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const WORKSPACE_TARGETS: [&str; 5] = [
    "focus",
    "focus_client",
    "focus_session",
    "focus_config",
    "focus_core",
];

fn default_directives(level: &str) -> String {
    let mut directives: Vec<String> = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    directives.push("reqwest=warn".to_string());
    directives.push("hyper=warn".to_string());
    directives.join(",")
}

/// Install the global subscriber.
///
/// - **Console**: compact, on stderr so command output stays clean. Filtered
///   by `RUST_LOG` if set, otherwise by `LOG_LEVEL` for the workspace crates.
/// - **File**: JSON lines in `focus.<date>.json` under the log directory,
///   rotated daily, at `info` and above.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(console_filter);

    let json_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("focus")
        .filename_suffix("json")
        .build(&config.log_dir)
        .with_context(|| format!("Failed to open log directory {}", config.log_dir.display()))?;

    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new(default_directives("info")));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
