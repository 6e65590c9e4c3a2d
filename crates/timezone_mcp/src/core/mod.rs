//! # Timezone MCP Server Core
//!
//! Location-to-timezone resolution backed by a fixed table of major cities.
//!
//! ## Modules
//! - `error`: Custom error types and error handling
//! - `models`: Tool requests and structured responses
//! - `provider`: The location table and the resolver over it
//! - `utils`: Input normalization, number formatting and shared constants

pub mod error;
pub mod models;
pub mod provider;
pub mod utils;
