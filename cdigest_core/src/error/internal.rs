//! Internal library error types

use thiserror::Error;

/// Failures that are not the caller's fault
#[derive(Error, Debug)]
pub enum InternalError {
    /// A digest computation could not run to completion
    #[error("Digest computation failed for {algorithms}: {message}")]
    DigestComputationFailed {
        algorithms: String,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl InternalError {
    /// Create a digest computation failure caused by reading the input
    pub fn digest_input_failed(algorithms: &str, source: std::io::Error) -> Self {
        Self::DigestComputationFailed {
            algorithms: algorithms.to_string(),
            message: format!("reading input failed: {source}"),
            source,
        }
    }
}
