use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::config::{Config, TransportMode};

/// Timezone MCP Server
///
/// Exposes `add` and `get_timezone` over the Model Context Protocol.
///
/// ## Transports
/// - `http` (default): SSE on `/sse` + `/sse/message`, streamable HTTP on `/mcp`
/// - `stdio`: MCP over stdin/stdout
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-timezone -- --transport stdio
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-timezone")]
#[command(about = "An MCP server that maps major city names to IANA timezones")]
#[command(version)]
pub struct Cli {
    /// Transport to serve the tools on
    #[arg(long, value_enum, default_value_t = TransportMode::Http)]
    pub transport: TransportMode,

    /// Address to bind in http mode
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1:8787")]
    pub bind: SocketAddr,

    /// SSE keep-alive interval in seconds (0 disables keep-alive pings)
    #[arg(long, value_name = "SECS", default_value_t = 15)]
    pub keep_alive: u64,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> Config {
        let sse_keep_alive = match self.keep_alive {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Config {
            transport: self.transport,
            bind: self.bind,
            sse_keep_alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Cli::try_parse_from(["mcp-server-timezone"])
            .unwrap()
            .into_config();

        assert_eq!(config.transport, TransportMode::Http);
        assert_eq!(config.bind, "127.0.0.1:8787".parse::<SocketAddr>().unwrap());
        assert_eq!(config.sse_keep_alive, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_overrides() {
        let config = Cli::try_parse_from([
            "mcp-server-timezone",
            "--transport",
            "stdio",
            "--bind",
            "0.0.0.0:9000",
            "--keep-alive",
            "0",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.transport, TransportMode::Stdio);
        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.sse_keep_alive, None);
    }

    #[test]
    fn test_invalid_bind() {
        assert!(Cli::try_parse_from(["mcp-server-timezone", "--bind", "not-an-addr"]).is_err());
    }
}
