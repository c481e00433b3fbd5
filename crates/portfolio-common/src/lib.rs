pub mod content;
pub mod error;
pub mod filter;
pub mod mcp_api;
pub mod model;
pub mod tab;
