//! Provider error types

use thiserror::Error;

/// Errors raised by the provider shell and resource adapters
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error(
        "Missing token: set the `token` attribute or the DATAFY_TOKEN environment variable"
    )]
    MissingToken,

    #[error("Invalid value for `{attribute}`: {message}")]
    InvalidAttribute { attribute: String, message: String },

    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("Unknown data source type: {0}")]
    UnknownDataSourceType(String),

    #[error("{context}: {source}")]
    Api {
        context: String,
        #[source]
        source: datafy_api::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProviderError {
    /// Wrap a client error with the operation that failed
    pub fn api(context: impl Into<String>, source: datafy_api::Error) -> Self {
        Self::Api {
            context: context.into(),
            source,
        }
    }

    pub fn invalid(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            attribute: attribute.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
