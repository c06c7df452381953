//! Keyed message authentication codes
//!
//! [`hmac`] is the RFC 2104 construction over a [`DigestContext`], for any
//! supported algorithm. [`mac_sha3_256`] is the sponge MAC: the key length is
//! absorbed as a 64-bit big-endian integer ahead of the key so that key and
//! message cannot trade bytes across their boundary.

use crate::hashing::{
    AlgorithmId, AlgorithmRegistry, DIGEST256_LEN, Digest, DigestContext, one_shot,
};
use crate::xof::Shake256Absorb;
use zeroize::Zeroizing;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC of `message` under `key` using `algorithm`
pub fn hmac(algorithm: AlgorithmId, key: &[u8], message: &[u8]) -> Digest {
    let block_size = AlgorithmRegistry::global().get(algorithm).block_size();

    let mut key_block = Zeroizing::new(vec![0u8; block_size]);
    if key.len() > block_size {
        let hashed = Zeroizing::new(one_shot(algorithm, key).into_bytes());
        key_block[..hashed.len()].copy_from_slice(&hashed);
    } else {
        key_block[..key.len()].copy_from_slice(key);
    }

    let inner_pad = Zeroizing::new(key_block.iter().map(|b| b ^ IPAD).collect::<Vec<u8>>());
    let outer_pad = Zeroizing::new(key_block.iter().map(|b| b ^ OPAD).collect::<Vec<u8>>());

    let mut inner = DigestContext::create(algorithm);
    inner.update(inner_pad.as_slice()).update(message);
    let inner_digest = inner.finalize();

    let mut outer = DigestContext::create(algorithm);
    outer.update(outer_pad.as_slice()).update(inner_digest.as_bytes());
    outer.finalize()
}

/// HMAC-SHA256 of `message` under `key`
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; DIGEST256_LEN] {
    let mut out = [0u8; DIGEST256_LEN];
    out.copy_from_slice(hmac(AlgorithmId::Sha256, key, message).as_bytes());
    out
}

/// SHA3 sponge MAC of `message` under `key`, `out_len` bytes long.
///
/// Absorbs `u64_be(key.len()) || key || message` into SHAKE256 and squeezes
/// `out_len` bytes. The result is not a truncated SHA3-256 digest of that
/// framing, so it will not match MACs produced that way. Shorter outputs are
/// prefixes of longer ones.
pub fn mac_sha3_256(key: &[u8], message: &[u8], out_len: usize) -> Vec<u8> {
    let mut out = vec![0u8; out_len];
    mac_sha3_256_into(&mut out, key, message);
    out
}

/// Same as [`mac_sha3_256`], squeezing exactly `out.len()` bytes into `out`
pub fn mac_sha3_256_into(out: &mut [u8], key: &[u8], message: &[u8]) {
    let key_len = (key.len() as u64).to_be_bytes();

    let mut sponge = Shake256Absorb::new();
    sponge.absorb(key_len).absorb(key).absorb(message);
    sponge.into_squeezing().squeeze_into(out);
}
