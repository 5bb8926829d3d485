use anyhow::{Result, anyhow};
use medscope::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Builds the log filter: `RUST_LOG` directives win, otherwise the configured level.
fn log_filter(configured_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level: LevelFilter = configured_level.parse().map_err(|_| {
        anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            configured_level
        )
    })?;

    Ok(EnvFilter::new(level.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let filter = match log_filter(&config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting MedScope server, image provider configured: {}",
        config.provider.credential().is_some()
    );

    server::run(config).await?;

    Ok(())
}
