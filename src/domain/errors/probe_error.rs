//! Image probe error types.

use thiserror::Error;

/// Reasons an image probe can fail.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum ProbeError {
    #[error("invalid image URL: {url}")]
    InvalidUrl { url: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("failed to decode image: {message}")]
    Decode { message: String },

    #[error("probe task failed: {message}")]
    Task { message: String },
}

impl ProbeError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates task error.
    #[must_use]
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
        }
    }

    /// Returns whether the host answered but the payload was not usable.
    #[must_use]
    pub const fn is_content_error(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::Decode { .. })
    }
}
