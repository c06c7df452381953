//! Algorithm identifiers and their fixed metadata

use crate::{Result, error::ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a SHA-1 digest
pub const DIGEST_LEN: usize = 20;
/// Length of a 256-bit digest (SHA-256, SHA3-256)
pub const DIGEST256_LEN: usize = 32;
/// Length of a 512-bit digest (SHA-512, SHA3-512)
pub const DIGEST512_LEN: usize = 64;

/// Number of supported digest algorithms
pub const N_DIGEST_ALGORITHMS: usize = 5;

/// Digest algorithms supported by the library
///
/// The discriminants are stable and match the raw identifiers accepted by
/// [`AlgorithmId::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum AlgorithmId {
    #[serde(rename = "sha1")]
    Sha1 = 0,
    #[serde(rename = "sha256")]
    Sha256 = 1,
    #[serde(rename = "sha512")]
    Sha512 = 2,
    #[serde(rename = "sha3-256")]
    Sha3_256 = 3,
    #[serde(rename = "sha3-512")]
    Sha3_512 = 4,
}

impl AlgorithmId {
    /// Every algorithm, in identifier order
    pub const ALL: [AlgorithmId; N_DIGEST_ALGORITHMS] = [
        AlgorithmId::Sha1,
        AlgorithmId::Sha256,
        AlgorithmId::Sha512,
        AlgorithmId::Sha3_256,
        AlgorithmId::Sha3_512,
    ];

    /// The algorithms bundled by [`crate::compute_common`]
    pub const COMMON: [AlgorithmId; 2] = [AlgorithmId::Sha1, AlgorithmId::Sha256];

    /// Output length in bytes
    pub const fn length(self) -> usize {
        match self {
            AlgorithmId::Sha1 => DIGEST_LEN,
            AlgorithmId::Sha256 | AlgorithmId::Sha3_256 => DIGEST256_LEN,
            AlgorithmId::Sha512 | AlgorithmId::Sha3_512 => DIGEST512_LEN,
        }
    }

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            AlgorithmId::Sha1 => "sha1",
            AlgorithmId::Sha256 => "sha256",
            AlgorithmId::Sha512 => "sha512",
            AlgorithmId::Sha3_256 => "sha3-256",
            AlgorithmId::Sha3_512 => "sha3-512",
        }
    }

    /// Stable raw identifier
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Whether this algorithm is part of the common digest bundle
    pub const fn is_common(self) -> bool {
        matches!(self, AlgorithmId::Sha1 | AlgorithmId::Sha256)
    }

    /// Look up an algorithm by its exact canonical name.
    ///
    /// Matching is case-sensitive: `"sha256"` parses, `"SHA256"` does not.
    pub fn parse(name: &str) -> Result<Self> {
        AlgorithmId::ALL
            .into_iter()
            .find(|alg| alg.name() == name)
            .ok_or_else(|| ValidationError::unrecognized_name(name).into())
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmId::parse(s)
    }
}

impl TryFrom<u8> for AlgorithmId {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self> {
        AlgorithmId::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ValidationError::unknown_algorithm(value).into())
    }
}

/// Digest length for a raw identifier, for callers holding untyped ids
pub fn length_of_raw(value: u8) -> Result<usize> {
    AlgorithmId::try_from(value).map(AlgorithmId::length)
}
