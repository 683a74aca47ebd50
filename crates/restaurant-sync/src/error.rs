//! Error types
//!
//! Every failure talking to the backend collapses into [`RemoteError`];
//! callers never branch on the cause.

/// Network, auth or server failure of a gateway call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("remote request failed: {message}")]
pub struct RemoteError {
    message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("malformed response: {}", err))
    }
}

/// Problems with the backend settings document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid backend config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("backend config has no GraphQL endpoint")]
    MissingEndpoint,

    #[error("API_KEY authentication configured without an API key")]
    MissingApiKey,
}
