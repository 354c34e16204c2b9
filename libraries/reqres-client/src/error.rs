//! Error types for the ReqRes users client.

use thiserror::Error;

/// Errors that can occur when talking to the users API.
#[derive(Error, Debug)]
pub enum UserApiError {
    /// Server responded with a status code other than 200
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// Transport failure or undecodable response body
    #[error("connection to the users API failed: {0}")]
    Connection(#[from] reqwest::Error),

    /// Invalid base URL in the client configuration
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Result type for users API operations.
pub type Result<T> = std::result::Result<T, UserApiError>;
