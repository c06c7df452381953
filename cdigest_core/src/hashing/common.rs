//! Common digest bundle
//!
//! Computes every algorithm in [`AlgorithmId::COMMON`] over the same input in
//! a single pass, one context per algorithm fed the same chunks.

use super::algorithm::{DIGEST256_LEN, DIGEST_LEN};
use super::output::to_hex;
use super::{AlgorithmId, DigestContext, for_each_chunk};
use crate::{Result, StreamConfig, error::InternalError};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::io::Read;

/// Number of algorithms in the common bundle
pub const N_COMMON_DIGEST_ALGORITHMS: usize = AlgorithmId::COMMON.len();

/// SHA-1 and SHA-256 of one input.
///
/// Storage keeps one fixed-width row per algorithm; shorter digests are
/// right-padded with zeros. Accessors only return the real digest bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct CommonDigests {
    d: [[u8; DIGEST256_LEN]; N_COMMON_DIGEST_ALGORITHMS],
}

impl CommonDigests {
    fn from_contexts(contexts: &[DigestContext; N_COMMON_DIGEST_ALGORITHMS]) -> Self {
        let mut d = [[0u8; DIGEST256_LEN]; N_COMMON_DIGEST_ALGORITHMS];
        for (row, ctx) in d.iter_mut().zip(contexts) {
            let digest = ctx.finalize();
            row[..digest.len()].copy_from_slice(digest.as_bytes());
        }
        Self { d }
    }

    /// Digest bytes for a common algorithm, `None` for any other algorithm
    pub fn get(&self, algorithm: AlgorithmId) -> Option<&[u8]> {
        row_index(algorithm).map(|idx| &self.d[idx][..algorithm.length()])
    }

    /// The zero-padded storage row for a common algorithm
    pub fn padded_row(&self, algorithm: AlgorithmId) -> Option<&[u8; DIGEST256_LEN]> {
        row_index(algorithm).map(|idx| &self.d[idx])
    }

    /// SHA-1 digest
    pub fn sha1(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&self.d[0][..DIGEST_LEN]);
        out
    }

    /// SHA-256 digest
    pub fn sha256(&self) -> [u8; DIGEST256_LEN] {
        self.d[1]
    }

    /// Iterate over `(algorithm, digest bytes)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (AlgorithmId, &[u8])> {
        AlgorithmId::COMMON
            .into_iter()
            .zip(self.d.iter())
            .map(|(alg, row)| (alg, &row[..alg.length()]))
    }
}

fn row_index(algorithm: AlgorithmId) -> Option<usize> {
    AlgorithmId::COMMON.iter().position(|alg| *alg == algorithm)
}

fn common_names() -> String {
    AlgorithmId::COMMON.map(AlgorithmId::name).join(",")
}

fn new_contexts() -> [DigestContext; N_COMMON_DIGEST_ALGORITHMS] {
    AlgorithmId::COMMON.map(DigestContext::create)
}

/// Compute every common digest of `data`
pub fn compute_common(data: &[u8]) -> Result<CommonDigests> {
    let mut contexts = new_contexts();
    for ctx in contexts.iter_mut() {
        ctx.update(data);
    }
    Ok(CommonDigests::from_contexts(&contexts))
}

/// Compute every common digest of everything `reader` yields, in one pass.
///
/// A read failure fails the whole bundle; no partial result is returned.
pub fn compute_common_reader<R: Read + ?Sized>(
    reader: &mut R,
    config: &StreamConfig,
) -> Result<CommonDigests> {
    config.validate()?;
    let mut contexts = new_contexts();

    let total = for_each_chunk(reader, config.buffer_size, |chunk| {
        for ctx in contexts.iter_mut() {
            ctx.update(chunk);
        }
    })
    .map_err(|e| InternalError::digest_input_failed(&common_names(), e))?;

    log::debug!("computed common digests over {total} bytes");
    Ok(CommonDigests::from_contexts(&contexts))
}

impl fmt::Debug for CommonDigests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (alg, bytes) in self.iter() {
            map.entry(&alg.name(), &to_hex(bytes));
        }
        map.finish()
    }
}

impl Serialize for CommonDigests {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(N_COMMON_DIGEST_ALGORITHMS))?;
        for (alg, bytes) in self.iter() {
            map.serialize_entry(alg.name(), &to_hex(bytes))?;
        }
        map.end()
    }
}
