use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use clap::Parser;
use tokio::net::TcpListener;

use anyhow::anyhow;

use call_screener::{ServerConfig, routes};

/// Call screener - telephony webhooks with a live operator dashboard
#[derive(Parser, Debug)]
#[command(name = "call-screener")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Load configuration from file or environment
    let config = if let Some(config_path) = cli.config {
        info!("Loading configuration from {}", config_path.display());
        ServerConfig::from_file(&config_path)?
    } else {
        ServerConfig::from_env()?
    };

    if config.operator_phone_number.is_none() {
        tracing::warn!("OPERATOR_PHONE_NUMBER is not set; connect requests will fail");
    }

    let address = config.address();
    info!("Starting server on {address}");

    let app = routes::create_app(config)?;

    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    info!("Server listening on http://{}", socket_addr);

    let listener = TcpListener::bind(&socket_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
