use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

use crate::core::utils::AVAILABLE_RESOURCES;

// Error codes
const ERROR_RESOURCE_NOT_FOUND: &str = "resource_not_found";
const ERROR_BIND_FAILED: &str = "bind_failed";
const ERROR_TRANSPORT: &str = "transport_error";
const ERROR_LOGGING_INIT: &str = "logging_initialization_failed";

/// Errors raised by the timezone server outside of normal tool results
#[derive(Debug, thiserror::Error)]
pub enum TimezoneServerError {
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Transport error: {0}")]
    Transport(String),
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl From<TimezoneServerError> for McpError {
    fn from(err: TimezoneServerError) -> Self {
        match err {
            TimezoneServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                ERROR_RESOURCE_NOT_FOUND,
                Some(json!({
                    "uri": uri,
                    "available_resources": AVAILABLE_RESOURCES
                })),
            ),
            TimezoneServerError::Bind { addr, source } => McpError::internal_error(
                ERROR_BIND_FAILED,
                Some(json!({"addr": addr.to_string(), "reason": source.to_string()})),
            ),
            TimezoneServerError::Transport(reason) => {
                McpError::internal_error(ERROR_TRANSPORT, Some(json!({"reason": reason})))
            }
            TimezoneServerError::LoggingInitialization(reason) => {
                McpError::internal_error(ERROR_LOGGING_INIT, Some(json!({"reason": reason})))
            }
        }
    }
}

pub type TimezoneServerResult<T> = Result<T, TimezoneServerError>;
pub type McpResult<T> = Result<T, McpError>;
