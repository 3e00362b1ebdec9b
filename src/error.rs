//! Error types for metadata extraction.
//!
//! This module defines the terminal failure kinds a fetch-and-extract call
//! can surface. Missing-input validation is owned by the endpoint layer and
//! never reaches the extractor.

/// Error type for fetch-and-extract operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network-level failure: malformed target, DNS, connection, TLS
    /// handshake, or timeout expiry.
    #[error("request failed: {0}")]
    Fetch(String),

    /// The target responded with a status outside the success range.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    /// The response body could not be parsed into a document tree.
    ///
    /// Rare in practice: tolerant HTML parsing degrades gracefully rather
    /// than failing, so extraction normally proceeds on any body.
    #[error("HTML parsing failed: {0}")]
    Parse(String),
}

/// Result type alias for fetch-and-extract operations.
pub type Result<T> = std::result::Result<T, Error>;
