//! Digest over an ordered sequence of byte strings
//!
//! Elements are streamed into one context in order, with no separators, so
//! memory use stays bounded by the largest element. Callers that control
//! element content rely on the prefix and suffix to frame the sequence.

use super::{AlgorithmId, Digest, DigestContext};
use crate::Result;

fn sequence_context<I>(
    algorithm: AlgorithmId,
    prefix: &[u8],
    elements: I,
    suffix: &[u8],
) -> DigestContext
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut ctx = DigestContext::create(algorithm);
    ctx.update(prefix);
    let mut count = 0usize;
    for element in elements {
        ctx.update(element);
        count += 1;
    }
    ctx.update(suffix);
    log::trace!("{algorithm} sequence digest over {count} elements");
    ctx
}

/// Digest of `prefix`, then every element in order, then `suffix`
pub fn digest_of_sequence<I>(
    algorithm: AlgorithmId,
    prefix: &[u8],
    elements: I,
    suffix: &[u8],
) -> Digest
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    sequence_context(algorithm, prefix, elements, suffix).finalize()
}

/// Digest of every element in order, then `suffix`
pub fn digest_list<I>(algorithm: AlgorithmId, elements: I, suffix: &[u8]) -> Digest
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    digest_of_sequence(algorithm, &[], elements, suffix)
}

/// Like [`digest_of_sequence`], writing the first `out.len()` digest bytes
pub fn digest_of_sequence_into<I>(
    out: &mut [u8],
    algorithm: AlgorithmId,
    prefix: &[u8],
    elements: I,
    suffix: &[u8],
) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    sequence_context(algorithm, prefix, elements, suffix).finalize_into(out)
}
