use std::net::SocketAddr;
use std::time::Duration;

/// Transport the server listens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TransportMode {
    /// HTTP with SSE on /sse and streamable HTTP on /mcp
    Http,
    /// MCP over stdin/stdout
    Stdio,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub transport: TransportMode,
    pub bind: SocketAddr,
    pub sse_keep_alive: Option<Duration>,
}
