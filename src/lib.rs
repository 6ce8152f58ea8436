// src/lib.rs
// =============================================================================
// Library root for ghlink2raw.
//
// The translator (github module) is a pure function with no side effects, so
// other programs can import it directly:
//
//   let raw = ghlink2raw::github_url_to_raw(url)?;
//
// The binary in src/main.rs is a thin wrapper around cli::run_with_args.
// =============================================================================

pub mod cli;       // src/cli.rs - argument parsing and output
pub mod error;     // src/error.rs - the InvalidFormat error
pub mod github;    // src/github/ - blob URL -> raw URL translation
pub mod logging;   // src/logging.rs - RUST_LOG diagnostics

pub use error::{TranslateError, EXPECTED_FORMAT};
pub use github::{github_url_to_raw, parse_blob_url, SourceReference};
