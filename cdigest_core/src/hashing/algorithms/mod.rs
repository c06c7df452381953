//! Digest algorithm implementations
//!
//! Each family file declares the algorithm metadata; the hash state itself is
//! a RustCrypto hasher wrapped in [`RustCryptoBackend`].

use super::AlgorithmId;
use super::traits::{DigestAlgorithmImpl, DigestBackend};
use digest::Digest;

mod sha1;
mod sha2;
mod sha3;

/// Build the implementation registered for `id`
pub(crate) fn implementation_for(id: AlgorithmId) -> Box<dyn DigestAlgorithmImpl> {
    match id {
        AlgorithmId::Sha1 => Box::new(sha1::Sha1Algorithm),
        AlgorithmId::Sha256 => Box::new(sha2::Sha256Algorithm),
        AlgorithmId::Sha512 => Box::new(sha2::Sha512Algorithm),
        AlgorithmId::Sha3_256 => Box::new(sha3::Sha3_256Algorithm),
        AlgorithmId::Sha3_512 => Box::new(sha3::Sha3_512Algorithm),
    }
}

/// Adapter from any RustCrypto fixed-output hasher to [`DigestBackend`]
pub(crate) struct RustCryptoBackend<D> {
    hasher: D,
}

impl<D> RustCryptoBackend<D>
where
    D: Digest + Clone + Send + 'static,
{
    pub(crate) fn boxed() -> Box<dyn DigestBackend> {
        Box::new(Self { hasher: D::new() })
    }
}

impl<D> DigestBackend for RustCryptoBackend<D>
where
    D: Digest + Clone + Send + 'static,
{
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.hasher, data);
    }

    fn finalize_boxed(self: Box<Self>) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }

    fn box_clone(&self) -> Box<dyn DigestBackend> {
        Box::new(Self {
            hasher: self.hasher.clone(),
        })
    }
}
