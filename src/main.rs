use clap::Parser;
use dotenvy::dotenv;
use focus::cli::{Cli, run};
use focus::logging::init_tracing;
use focus::state::init_app_context;
use focus_config::LoggingConfig;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&LoggingConfig::from_env())?;

    let ctx = init_app_context()?;
    debug!(api.base_url = %ctx.client.base_url(), "Application context ready");

    run(cli.command, &ctx).await
}
