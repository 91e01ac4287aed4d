//! Error types for folio-core

use thiserror::Error;

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the fallible edges of the core crate.
///
/// The affix finder and the benchmark normalizer are total and never
/// produce one of these; only file loading, JSON decoding and date
/// parsing do.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid date '{0}': expected format like 'Apr 20, 2022'")]
    InvalidDate(String),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}
