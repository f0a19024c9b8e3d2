//! # Errors
//!
//! A single error type for the client and configuration layers. Transport
//! failures, non-2xx responses and body decode failures all arrive as
//! [`Error::Http`] with the underlying `reqwest::Error` untouched, so callers
//! see exactly what the HTTP stack reported.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL '{url}' cannot carry path segments")]
    BaseUrlCannotBeABase { url: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from {endpoint}: expected {expected}, got {found}")]
    UnexpectedShape {
        endpoint: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to decode response entry: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to load profile file '{path}': {message}")]
    Profile { path: String, message: String },
}
