//! Core error types for asg-status.

use thiserror::Error;

/// Core error type for instance and Auto Scaling operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The instance metadata service could not be reached.
    #[error("EC2 Metadata is not available... Are we running on an EC2 instance?")]
    MetadataUnavailable,

    /// The metadata service answered but the document was unusable.
    #[error("Invalid instance metadata: {0}")]
    InvalidMetadata(String),

    /// The instance carries no Auto Scaling Group tag.
    #[error("Required tag: {0} was not present on EC2 Instance!")]
    MissingGroupTag(&'static str),

    /// An AWS API call failed.
    #[error("{operation} failed: {message}")]
    Api {
        /// API operation name.
        operation: &'static str,
        /// Rendered error chain.
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Creates an API error for the given operation.
    pub fn api(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Api {
            operation,
            message: message.into(),
        }
    }
}
