// Error types for follow-tracker.
// Covers GitHub API failures, transport faults, and local export/IO errors.

use std::fmt;

use thiserror::Error;

/// Broad category of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Could not connect to the server.
    Connect,
    /// The request or response read timed out.
    Timeout,
    /// Anything else reqwest reports (body decode, redirect loops, ...).
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransportKind::Connect => "connection error",
            TransportKind::Timeout => "timeout",
            TransportKind::Other => "request error",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at epoch {reset_at}")]
    RateLimited { reset_at: u64 },

    #[error("API request failed with status code {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("{kind}: {message}")]
    Transport { kind: TransportKind, message: String },

    #[error("Token cannot be used in an Authorization header")]
    InvalidToken,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connect
        } else {
            TransportKind::Other
        };

        TrackerError::Transport {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        TrackerError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TrackerError::NotFound("octocat".into()).to_string(),
            "Resource not found: octocat"
        );
        assert_eq!(
            TrackerError::RequestFailed {
                status: 500,
                body: "boom".into()
            }
            .to_string(),
            "API request failed with status code 500: boom"
        );
        assert_eq!(
            TrackerError::Transport {
                kind: TransportKind::Timeout,
                message: "deadline".into()
            }
            .to_string(),
            "timeout: deadline"
        );
    }
}
