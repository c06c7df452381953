//! Digest Core Library
//!
//! Uniform digest, extendable-output and MAC primitives over SHA-1, SHA-2 and
//! SHA-3. Callers pick an algorithm at runtime through [`AlgorithmId`] and
//! drive an owned [`DigestContext`]; the hash math itself comes from the
//! RustCrypto `sha1`, `sha2` and `sha3` crates.

pub mod error;
pub mod hashing;
pub mod mac;
pub mod xof;

// Re-export main types
pub use error::{Error, Result};
pub use hashing::{
    AlgorithmId, AlgorithmRegistry, CommonDigests, DIGEST_LEN, DIGEST256_LEN, DIGEST512_LEN,
    Digest, DigestContext, compute_common, compute_common_reader, digest_list, digest_of_sequence,
    digest_of_sequence_into, digest_sha1, digest256, digest512, one_shot, to_hex,
};
pub use mac::{hmac, hmac_sha256, mac_sha3_256, mac_sha3_256_into};
pub use xof::{Shake256Absorb, Shake256Squeeze, XofContext, XofPhase};

use error::ValidationError;
use serde::{Deserialize, Serialize};

/// Default chunk size used when streaming readers into contexts
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Settings for the reader-based helpers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Bytes read from the source per update
    pub buffer_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl StreamConfig {
    /// Create a test configuration
    pub fn test() -> Self {
        Self {
            buffer_size: 1024, // 1KB chunks to exercise chunk boundaries
        }
    }

    /// Reject settings the streaming helpers cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(
                ValidationError::invalid_configuration("buffer_size must be positive").into(),
            );
        }
        Ok(())
    }
}
