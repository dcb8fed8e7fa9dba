//! Errors from talking to the remote store

use thiserror::Error;

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced a response (DNS, connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The store answered with a non-success status
    #[error("Remote store returned status {status}")]
    Status { status: u16 },

    /// The response body was not the JSON we expected
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// A URL could not be built from the configured base
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl RemoteError {
    pub fn invalid_url<S: Into<String>>(msg: S) -> Self {
        RemoteError::InvalidUrl(msg.into())
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RemoteError::Status {
                status: status.as_u16(),
            },
            None => RemoteError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for RemoteError {
    fn from(err: url::ParseError) -> Self {
        RemoteError::InvalidUrl(err.to_string())
    }
}
