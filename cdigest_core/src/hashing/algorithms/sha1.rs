//! SHA-1 digest algorithm

use super::RustCryptoBackend;
use crate::hashing::AlgorithmId;
use crate::hashing::traits::{DigestAlgorithmImpl, DigestBackend};

pub struct Sha1Algorithm;

impl DigestAlgorithmImpl for Sha1Algorithm {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Sha1
    }

    fn display_name(&self) -> &'static str {
        "SHA-1"
    }

    fn block_size(&self) -> usize {
        64
    }

    fn create_backend(&self) -> Box<dyn DigestBackend> {
        RustCryptoBackend::<::sha1::Sha1>::boxed()
    }
}
