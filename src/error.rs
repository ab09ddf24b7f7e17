//! Error types for route53-ddns.

use thiserror::Error;

/// Result type alias for route53-ddns.
pub type Result<T> = std::result::Result<T, DdnsError>;

/// DDNS error types, one per failure stage.
#[derive(Error, Debug)]
pub enum DdnsError {
    /// Configuration file missing, unreadable, or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure talking to the IP discovery service.
    #[error("Network error: {0}")]
    Network(String),

    /// IP discovery service returned a body we could not interpret.
    #[error("Unexpected IP service response: {0}")]
    ResponseFormat(String),

    /// AWS credentials or region could not be resolved.
    #[error("Credential error: {0}")]
    Credential(String),

    /// Route 53 rejected the change submission.
    #[error("Provider API error: {0}")]
    ProviderApi(String),
}

impl DdnsError {
    /// Process exit code for this error kind.
    ///
    /// Lets a wrapping scheduler distinguish failure causes without
    /// parsing stderr.
    pub fn exit_code(&self) -> i32 {
        match self {
            DdnsError::Config(_) => 2,
            DdnsError::Network(_) => 3,
            DdnsError::ResponseFormat(_) => 4,
            DdnsError::Credential(_) => 5,
            DdnsError::ProviderApi(_) => 6,
        }
    }
}

impl From<reqwest::Error> for DdnsError {
    fn from(e: reqwest::Error) -> Self {
        DdnsError::Network(e.to_string())
    }
}

impl From<serde_yaml::Error> for DdnsError {
    fn from(e: serde_yaml::Error) -> Self {
        DdnsError::Config(e.to_string())
    }
}
