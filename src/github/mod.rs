// src/github/mod.rs
// =============================================================================
// This module handles GitHub links.
//
// Currently implements:
// - Parsing GitHub "blob" URLs into owner/repo/branch/path
// - Rebuilding them as raw.githubusercontent.com URLs
//
// No network access happens here. We never check that the raw URL exists.
// =============================================================================

mod raw;

// Re-export the translator so callers can write `github::github_url_to_raw()`
pub use raw::{github_url_to_raw, parse_blob_url, SourceReference};
