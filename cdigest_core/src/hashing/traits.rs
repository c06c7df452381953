//! Core traits for the digest backend dispatch

use super::AlgorithmId;

/// Static description of one digest algorithm and a factory for its state
pub trait DigestAlgorithmImpl: Send + Sync {
    /// Identifier this implementation is registered under
    fn id(&self) -> AlgorithmId;

    /// Display name for user interfaces
    fn display_name(&self) -> &'static str;

    /// Input block size in bytes, used for keyed constructions
    fn block_size(&self) -> usize;

    /// Create fresh, empty backend state
    fn create_backend(&self) -> Box<dyn DigestBackend>;

    /// Output length in bytes
    fn output_len(&self) -> usize {
        self.id().length()
    }
}

/// Incremental hash state behind a [`crate::DigestContext`]
pub trait DigestBackend: Send {
    /// Feed more input
    fn update(&mut self, data: &[u8]);

    /// Consume the state and produce the digest bytes
    fn finalize_boxed(self: Box<Self>) -> Vec<u8>;

    /// Deep copy of the accumulated state
    fn box_clone(&self) -> Box<dyn DigestBackend>;
}

impl Clone for Box<dyn DigestBackend> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}
