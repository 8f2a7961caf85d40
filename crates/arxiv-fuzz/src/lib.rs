//! Fuzzing library for arxiv-mcp.
//!
//! This crate provides fuzzing targets for the Atom feed parser, arXiv
//! identifier normalization and tool input deserialization.
//!
//! # Usage
//!
//! ```bash
//! cd crates/arxiv-fuzz
//! cargo +nightly fuzz run fuzz_feed_parse -- -max_total_time=60
//! ```

pub use arxiv_mcp::client::atom;
pub use arxiv_mcp::models;
