// src/error.rs
// =============================================================================
// The one error our translator can produce.
//
// A GitHub link either has the shape we expect or it doesn't, so there is
// exactly one variant. The message is fixed and tells the user what a good
// link looks like.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - Type aliases: Result<T> saves repeating the error type everywhere
// =============================================================================

use thiserror::Error;

/// The link shape we accept, shown to the user when their input doesn't match.
pub const EXPECTED_FORMAT: &str = "https://github.com/owner/repo/blob/branch/path/to/file";

/// Errors returned by the GitHub link translator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The input is not a `https://github.com/<owner>/<repo>/blob/<branch>/<path>` link.
    #[error("Invalid GitHub URL. Expected format: {}", EXPECTED_FORMAT)]
    InvalidFormat,
}

/// A specialized `Result` type for translator operations.
pub type Result<T> = std::result::Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message() {
        assert_eq!(
            TranslateError::InvalidFormat.to_string(),
            "Invalid GitHub URL. Expected format: https://github.com/owner/repo/blob/branch/path/to/file"
        );
    }
}
