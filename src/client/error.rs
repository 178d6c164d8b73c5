use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// No response was received.
    #[error("{0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// A success response whose body does not match the payload contract.
    #[error("invalid {endpoint} response payload: {reason}")]
    Decode {
        endpoint: &'static str,
        reason: String,
    },
    #[error("failed to build {endpoint} request: {reason}")]
    Request {
        endpoint: &'static str,
        reason: String,
    },
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a file")]
    NoFileSelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL is not configured (pass --api-url or set SEPSIS_API_URL)")]
    MissingBaseUrl,
    #[error("unsupported API base URL scheme in '{0}'")]
    UnsupportedScheme(String),
}

/// Fallback message when an error response carries no `error` field.
pub fn generic_status_message(status: u16) -> String {
    format!("Request failed with status code {}", status)
}
