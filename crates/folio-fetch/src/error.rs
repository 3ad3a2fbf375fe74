//! Errors raised while reading a collection from the API.
//!
//! The `Display` text of each variant is what a section shows to the
//! visitor when it falls back to bundled data.

use thiserror::Error;

/// Why a live read could not produce a collection.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Failed to fetch {noun}: {message}")]
    Transport {
        /// Plural noun of the collection being fetched.
        noun: &'static str,
        /// Transport-level detail.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not valid JSON.
    #[error("Failed to parse response body: {0}")]
    Decode(String),

    /// The body was JSON but not a sequence of the expected records.
    #[error("Invalid data format received from API{}", detail_suffix(.detail))]
    Shape {
        /// Decoder detail when the elements did not match the record shape.
        detail: Option<String>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}

impl FetchError {
    /// Create a transport error for a collection.
    pub fn transport(noun: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            noun,
            message: message.into(),
        }
    }

    /// Create a status error.
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// The body was not an array.
    pub fn not_a_sequence() -> Self {
        Self::Shape { detail: None }
    }

    /// The body was an array of the wrong records.
    pub fn bad_elements(detail: impl Into<String>) -> Self {
        Self::Shape {
            detail: Some(detail.into()),
        }
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
