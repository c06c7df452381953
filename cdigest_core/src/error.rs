//! Error types for the digest core library
//!
//! Errors are split by who is at fault: validation errors are caller
//! contract violations, internal errors mean a computation could not finish,
//! and I/O errors come from readers handed to the streaming helpers.

use thiserror::Error;

pub mod internal;
pub mod validation;

pub use internal::InternalError;
pub use validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the digest core library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure while streaming input into a context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller contract violations
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Computation failures
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// Whether this error reports a bug in the calling code rather than a
    /// runtime condition
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::AlgorithmId;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_algorithm_mismatch_error_creation() {
        let error = Error::Validation(ValidationError::algorithm_mismatch(
            AlgorithmId::Sha512,
            AlgorithmId::Sha3_512,
        ));

        match error {
            Error::Validation(ValidationError::AlgorithmMismatch { expected, found }) => {
                assert_eq!(expected, AlgorithmId::Sha512);
                assert_eq!(found, AlgorithmId::Sha3_512);
            }
            _ => panic!("Expected Validation::AlgorithmMismatch error"),
        }
    }

    #[test]
    fn test_validation_errors_are_caller_errors() {
        let errors = vec![
            Error::Validation(ValidationError::unknown_algorithm(7)),
            Error::Validation(ValidationError::unrecognized_name("md5")),
            Error::Validation(ValidationError::InvalidPhase),
            Error::Validation(ValidationError::invalid_output_length(65, 64)),
        ];

        for error in errors {
            assert!(error.is_caller_error(), "{error} should be a caller error");
        }
    }

    #[test]
    fn test_internal_and_io_errors_are_not_caller_errors() {
        let internal = Error::Internal(InternalError::digest_input_failed(
            "sha1,sha256",
            io::Error::other("test"),
        ));
        let io: Error = io::Error::other("disk on fire").into();

        assert!(!internal.is_caller_error());
        assert!(!io.is_caller_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();

        match error {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "short read");
        let error = Error::Internal(InternalError::digest_input_failed("sha1", io_error));

        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_display_is_transparent() {
        let error = Error::Validation(ValidationError::unrecognized_name("SHA-1"));
        assert_eq!(
            error.to_string(),
            ValidationError::unrecognized_name("SHA-1").to_string()
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
