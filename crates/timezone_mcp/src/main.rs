mod cli;
mod config;
mod core;
mod logging;
mod server;
mod transport;

use cli::Cli;
use config::TransportMode;

/// Timezone MCP Server
///
/// Usage: cargo run --bin mcp-server-timezone -- --bind 127.0.0.1:8787
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse_config();

    logging::init_logging()?;
    tracing::info!("Starting Timezone MCP server ({:?} transport)", config.transport);

    let result = match config.transport {
        TransportMode::Http => transport::serve_http(config.bind, config.sse_keep_alive).await,
        TransportMode::Stdio => transport::serve_stdio().await,
    };

    if let Err(e) = result {
        tracing::error!("Error running Timezone MCP server: {}", e);
        return Err(e.into());
    }

    Ok(())
}
