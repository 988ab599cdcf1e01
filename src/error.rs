//! Error types for unlecture library.

use std::io;
use thiserror::Error;

/// Result type alias for unlecture operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing documents or cleaning transcripts.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding JSON (word dumps, API payloads).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A word record failed validation.
    #[error("Invalid word record #{index}: {reason}")]
    InvalidWord {
        /// Position of the word in the source sequence
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The word source emitted pages out of order.
    #[error("Word source page order violated: page {found} after page {previous}")]
    PageOrder {
        /// Page of the preceding word
        previous: u32,
        /// Page that broke the ordering
        found: u32,
    },

    /// Malformed OCR output.
    #[error("OCR parse error: {0}")]
    OcrParse(String),

    /// A configured pattern could not be compiled.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Invalid option values.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// No API key is available for the text generation backend.
    #[error("OPENROUTER_KEY not found in environment variables")]
    MissingApiKey,

    /// Network or HTTP failure while talking to the text generation backend.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The text generation backend answered without any content.
    #[error("No response content found in API response")]
    EmptyResponse,

    /// Caller supplied unusable input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(feature = "openrouter")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}
