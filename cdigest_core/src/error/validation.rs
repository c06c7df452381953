//! Validation related error types
//!
//! Every variant here is a contract violation by the caller. None of them
//! are transient, so nothing in the crate retries after seeing one.

use crate::hashing::AlgorithmId;
use thiserror::Error;

/// Caller contract violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Raw algorithm identifier outside the known range
    #[error("Unknown digest algorithm identifier: {value}")]
    UnknownAlgorithm { value: u8 },

    /// Algorithm name with no exact match
    #[error("Unrecognized digest algorithm name: '{name}'")]
    UnrecognizedName { name: String },

    /// Assignment between contexts bound to different algorithms
    #[error("Digest algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch {
        expected: AlgorithmId,
        found: AlgorithmId,
    },

    /// Absorb attempted after the XOF started producing output
    #[error("Invalid XOF phase: cannot absorb input after output has been squeezed")]
    InvalidPhase,

    /// Output buffer longer than the digest
    #[error(
        "Invalid output length: requested {requested} bytes but only {available} are available"
    )]
    InvalidOutputLength { requested: usize, available: usize },

    /// Algorithm does not produce the fixed width the caller asked for
    #[error("Algorithm {algorithm} does not produce a {expected}-byte digest")]
    WrongDigestWidth {
        algorithm: AlgorithmId,
        expected: usize,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ValidationError {
    /// Create an unknown algorithm error
    pub fn unknown_algorithm(value: u8) -> Self {
        Self::UnknownAlgorithm { value }
    }

    /// Create an unrecognized name error
    pub fn unrecognized_name(name: &str) -> Self {
        Self::UnrecognizedName {
            name: name.to_string(),
        }
    }

    /// Create an algorithm mismatch error
    pub fn algorithm_mismatch(expected: AlgorithmId, found: AlgorithmId) -> Self {
        Self::AlgorithmMismatch { expected, found }
    }

    /// Create an invalid output length error
    pub fn invalid_output_length(requested: usize, available: usize) -> Self {
        Self::InvalidOutputLength {
            requested,
            available,
        }
    }

    /// Create a wrong digest width error
    pub fn wrong_digest_width(algorithm: AlgorithmId, expected: usize) -> Self {
        Self::WrongDigestWidth {
            algorithm,
            expected,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: &str) -> Self {
        Self::InvalidConfiguration {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_error() {
        let error = ValidationError::unknown_algorithm(9);
        assert!(error.to_string().contains("Unknown digest algorithm"));
        assert!(error.to_string().contains('9'));
    }

    #[test]
    fn test_unrecognized_name_error() {
        let error = ValidationError::unrecognized_name("SHA256");
        assert!(error.to_string().contains("Unrecognized"));
        assert!(error.to_string().contains("'SHA256'"));
    }

    #[test]
    fn test_algorithm_mismatch_error() {
        let error = ValidationError::algorithm_mismatch(AlgorithmId::Sha256, AlgorithmId::Sha1);
        let message = error.to_string();
        assert!(message.contains("expected sha256"));
        assert!(message.contains("found sha1"));
    }

    #[test]
    fn test_invalid_phase_error() {
        let error = ValidationError::InvalidPhase;
        assert!(error.to_string().contains("cannot absorb"));
    }

    #[test]
    fn test_invalid_output_length_error() {
        let error = ValidationError::invalid_output_length(40, 32);
        assert!(error.to_string().contains("40"));
        assert!(error.to_string().contains("32"));
    }

    #[test]
    fn test_wrong_digest_width_error() {
        let error = ValidationError::wrong_digest_width(AlgorithmId::Sha1, 32);
        assert!(error.to_string().contains("sha1"));
        assert!(error.to_string().contains("32-byte"));
    }

    #[test]
    fn test_invalid_configuration_error() {
        let error = ValidationError::invalid_configuration("buffer_size must be positive");
        assert!(error.to_string().contains("Invalid configuration"));
        assert!(error.to_string().contains("buffer_size"));
    }
}
