//! SHA-3 family: SHA3-256 and SHA3-512
//!
//! Block size here is the sponge rate, which is what HMAC pads to.

use super::RustCryptoBackend;
use crate::hashing::AlgorithmId;
use crate::hashing::traits::{DigestAlgorithmImpl, DigestBackend};

pub struct Sha3_256Algorithm;

impl DigestAlgorithmImpl for Sha3_256Algorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Sha3_256
    }

    fn display_name(&self) -> &'static str {
        "SHA3-256"
    }

    fn block_size(&self) -> usize {
        136
    }

    fn create_backend(&self) -> Box<dyn DigestBackend> {
        RustCryptoBackend::<::sha3::Sha3_256>::boxed()
    }
}

pub struct Sha3_512Algorithm;

impl DigestAlgorithmImpl for Sha3_512Algorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Sha3_512
    }

    fn display_name(&self) -> &'static str {
        "SHA3-512"
    }

    fn block_size(&self) -> usize {
        72
    }

    fn create_backend(&self) -> Box<dyn DigestBackend> {
        RustCryptoBackend::<::sha3::Sha3_512>::boxed()
    }
}
