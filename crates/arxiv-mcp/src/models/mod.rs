//! Data models for arXiv entities and tool inputs.
//!
//! Papers are built from Atom entries by [`crate::client::atom`]; inputs are
//! deserialized from MCP tool arguments and validated before any request.

mod enums;
pub mod ids;
mod inputs;
mod paper;

pub use enums::{ResponseFormat, SortBy, SortOrder};
pub use ids::{is_valid_arxiv_id, normalize_arxiv_id, validate_category};
pub use inputs::*;
pub use paper::{Feed, Paper};
