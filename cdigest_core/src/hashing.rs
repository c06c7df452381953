//! Digest calculation for the digest core library
//!
//! Algorithm metadata lives in [`algorithm`] and [`registry`]; the running
//! state is a [`DigestContext`]. The free functions here are conveniences over
//! a context for callers that have all their input at once.

use crate::{Result, error::ValidationError};
use std::io::{self, Read};

pub mod algorithm;
mod algorithms;
pub mod common;
mod context;
mod output;
mod registry;
pub mod sequence;
mod traits;

pub use algorithm::{AlgorithmId, DIGEST_LEN, DIGEST256_LEN, DIGEST512_LEN};
pub use common::{CommonDigests, compute_common, compute_common_reader};
pub use context::DigestContext;
pub use output::{Digest, to_hex};
pub use registry::AlgorithmRegistry;
pub use sequence::{digest_list, digest_of_sequence, digest_of_sequence_into};
pub use traits::{DigestAlgorithmImpl, DigestBackend};

/// Digest of `data` in one call
pub fn one_shot(algorithm: AlgorithmId, data: impl AsRef<[u8]>) -> Digest {
    let mut ctx = DigestContext::create(algorithm);
    ctx.update(data);
    ctx.finalize()
}

/// SHA-1 digest of `data`
pub fn digest_sha1(data: impl AsRef<[u8]>) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(one_shot(AlgorithmId::Sha1, data).as_bytes());
    out
}

/// 256-bit digest of `data`; `algorithm` must be SHA-256 or SHA3-256
pub fn digest256(
    data: impl AsRef<[u8]>,
    algorithm: AlgorithmId,
) -> Result<[u8; DIGEST256_LEN]> {
    fixed_width(data, algorithm)
}

/// 512-bit digest of `data`; `algorithm` must be SHA-512 or SHA3-512
pub fn digest512(
    data: impl AsRef<[u8]>,
    algorithm: AlgorithmId,
) -> Result<[u8; DIGEST512_LEN]> {
    fixed_width(data, algorithm)
}

fn fixed_width<const N: usize>(
    data: impl AsRef<[u8]>,
    algorithm: AlgorithmId,
) -> Result<[u8; N]> {
    if algorithm.length() != N {
        return Err(ValidationError::wrong_digest_width(algorithm, N).into());
    }
    let mut out = [0u8; N];
    out.copy_from_slice(one_shot(algorithm, data).as_bytes());
    Ok(out)
}

/// Read `reader` to the end in `buffer_size` chunks, handing each to `sink`.
/// Returns the total number of bytes read.
pub(crate) fn for_each_chunk<R: Read + ?Sized>(
    reader: &mut R,
    buffer_size: usize,
    mut sink: impl FnMut(&[u8]),
) -> io::Result<u64> {
    let mut buffer = vec![0u8; buffer_size];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sink(&buffer[..n]);
        total += n as u64;
    }

    Ok(total)
}
