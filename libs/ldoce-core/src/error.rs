//! Error types for ldoce-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while transforming an entry page.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("page has no h1.pagetitle headword")]
    MissingHeadword,

    #[error("invalid audio pattern for base {base}: {source}")]
    AudioPattern {
        base: String,
        #[source]
        source: regex::Error,
    },
}
