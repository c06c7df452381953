//! SHA-2 family: SHA-256 and SHA-512

use super::RustCryptoBackend;
use crate::hashing::AlgorithmId;
use crate::hashing::traits::{DigestAlgorithmImpl, DigestBackend};

pub struct Sha256Algorithm;

impl DigestAlgorithmImpl for Sha256Algorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Sha256
    }

    fn display_name(&self) -> &'static str {
        "SHA-256"
    }

    fn block_size(&self) -> usize {
        64
    }

    fn create_backend(&self) -> Box<dyn DigestBackend> {
        RustCryptoBackend::<::sha2::Sha256>::boxed()
    }
}

pub struct Sha512Algorithm;

impl DigestAlgorithmImpl for Sha512Algorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Sha512
    }

    fn display_name(&self) -> &'static str {
        "SHA-512"
    }

    fn block_size(&self) -> usize {
        128
    }

    fn create_backend(&self) -> Box<dyn DigestBackend> {
        RustCryptoBackend::<::sha2::Sha512>::boxed()
    }
}
