//! Header echo fixture entry point.
//!
//! Loads configuration, binds the listener, and serves the fixture:
//!
//! ```text
//! Client request ──▶ middleware (request ID, timeout, trace)
//!                      └─▶ header snapshot ──▶ page data / rendered HTML
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use header_echo::config::{load_config, EchoConfig};
use header_echo::http::HttpServer;
use header_echo::observability::logging;

/// HTTP test backend that echoes request headers.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to a TOML config file (defaults to echo.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the bind address from the config.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // An explicit --config must exist; the default path is optional.
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let default_path = PathBuf::from("echo.toml");
            if default_path.exists() {
                load_config(&default_path)?
            } else {
                EchoConfig::default()
            }
        }
    };

    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "header-echo starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
