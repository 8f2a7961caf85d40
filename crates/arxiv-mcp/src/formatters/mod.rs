//! Output formatters for MCP tool responses.

mod json;
mod markdown;

pub use json::*;
pub use markdown::*;
