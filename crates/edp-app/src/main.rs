mod cli;
mod journal;
mod runner;

use std::process::ExitCode;

use edp_config::EdpConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "edp=info";

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Read config before logging is up so its level can apply; report
    // the outcome once the subscriber exists.
    let loaded = edp_config::load_config(args.config.as_deref());

    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => format!("edp={}", config.logging.level.as_str()),
        Err(_) => DEFAULT_DIRECTIVE.to_string(),
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&log_directive)
        }))
        .init();

    tracing::info!("edp v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        EdpConfig::default()
    });

    match runner::run(args, config).await {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
