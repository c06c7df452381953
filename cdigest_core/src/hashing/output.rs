//! Finalized digest value

use super::AlgorithmId;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt::{self, Write};

/// Lowercase hex rendering of raw bytes
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
}

/// Digest bytes tagged with the algorithm that produced them
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: AlgorithmId,
    bytes: Vec<u8>,
}

impl Digest {
    pub(crate) fn new(algorithm: AlgorithmId, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.length());
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Digest length in bytes, always `algorithm().length()`
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; every supported algorithm has a non-empty output
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take ownership of the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hexadecimal rendering
    pub fn to_hex(&self) -> String {
        to_hex(&self.bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}:{self})", self.algorithm)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Digest", 2)?;
        state.serialize_field("algorithm", &self.algorithm)?;
        state.serialize_field("hex", &self.to_hex())?;
        state.end()
    }
}
