//! Central registry for digest algorithm implementations
//!
//! The table is built once on first use and never mutated afterwards.

use super::AlgorithmId;
use super::algorithm::N_DIGEST_ALGORITHMS;
use super::traits::DigestAlgorithmImpl;
use crate::Result;
use once_cell::sync::OnceCell;

/// Immutable table of all digest algorithms, indexed by identifier
pub struct AlgorithmRegistry {
    algorithms: [Box<dyn DigestAlgorithmImpl>; N_DIGEST_ALGORITHMS],
}

impl AlgorithmRegistry {
    fn new() -> Self {
        Self {
            algorithms: AlgorithmId::ALL.map(super::algorithms::implementation_for),
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            log::debug!("initializing digest algorithm registry");
            Self::new()
        })
    }

    /// Get the implementation for an algorithm
    pub fn get(&self, id: AlgorithmId) -> &dyn DigestAlgorithmImpl {
        self.algorithms[usize::from(id.raw())].as_ref()
    }

    /// Get the implementation registered under a canonical name
    pub fn lookup(&self, name: &str) -> Result<&dyn DigestAlgorithmImpl> {
        AlgorithmId::parse(name).map(|id| self.get(id))
    }

    /// Canonical names of all registered algorithms, in identifier order
    pub fn list(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|algo| algo.id().name()).collect()
    }

    /// Iterate over all registered implementations
    pub fn iter(&self) -> impl Iterator<Item = &dyn DigestAlgorithmImpl> {
        self.algorithms.iter().map(|algo| algo.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_indexed_by_identifier() {
        let registry = AlgorithmRegistry::global();
        for alg in AlgorithmId::ALL {
            let algo = registry.get(alg);
            assert_eq!(algo.id(), alg);
            assert_eq!(algo.output_len(), alg.length());
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = AlgorithmRegistry::global();
        assert_eq!(registry.lookup("sha3-256").unwrap().id(), AlgorithmId::Sha3_256);
        assert!(registry.lookup("md5").is_err());
    }

    #[test]
    fn test_list() {
        assert_eq!(
            AlgorithmRegistry::global().list(),
            vec!["sha1", "sha256", "sha512", "sha3-256", "sha3-512"]
        );
    }

    #[test]
    fn test_block_sizes() {
        let registry = AlgorithmRegistry::global();
        let sizes: Vec<_> = registry.iter().map(|algo| algo.block_size()).collect();
        assert_eq!(sizes, vec![64, 64, 128, 136, 72]);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(
            AlgorithmRegistry::global(),
            AlgorithmRegistry::global()
        ));
    }
}
