//! Datafy API error types

use thiserror::Error;

/// Errors returned by the Datafy API client
#[derive(Error, Debug)]
pub enum Error {
    /// Non-success response decoded from the API error body
    #[error("status code {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
