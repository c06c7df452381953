//! Incremental digest context

use super::traits::DigestBackend;
use super::{AlgorithmId, AlgorithmRegistry, Digest, for_each_chunk};
use crate::{Result, StreamConfig, error::ValidationError};
use std::fmt;
use std::io::Read;

/// Running hash state bound to one algorithm.
///
/// Reading the digest never consumes the context: [`DigestContext::finalize`]
/// finalizes a private copy, so more input can follow and later reads reflect
/// it. `Clone` and [`DigestContext::duplicate`] produce a fully independent
/// copy of the accumulated state.
#[derive(Clone)]
pub struct DigestContext {
    algorithm: AlgorithmId,
    backend: Box<dyn DigestBackend>,
}

impl DigestContext {
    /// Create a SHA-1 context
    pub fn new() -> Self {
        Self::create(AlgorithmId::Sha1)
    }

    /// Create an empty context for `algorithm`
    pub fn create(algorithm: AlgorithmId) -> Self {
        log::trace!("creating {algorithm} digest context");
        Self {
            algorithm,
            backend: AlgorithmRegistry::global().get(algorithm).create_backend(),
        }
    }

    /// Same as [`DigestContext::create`]
    pub fn with_algorithm(algorithm: AlgorithmId) -> Self {
        Self::create(algorithm)
    }

    /// Algorithm this context was created for
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Append bytes to the running hash
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.backend.update(data.as_ref());
        self
    }

    /// Append everything `reader` yields, returning the number of bytes read
    pub fn update_reader<R: Read + ?Sized>(
        &mut self,
        reader: &mut R,
        config: &StreamConfig,
    ) -> Result<u64> {
        config.validate()?;
        let total = for_each_chunk(reader, config.buffer_size, |chunk| {
            self.backend.update(chunk);
        })?;
        log::debug!("streamed {total} bytes into {} context", self.algorithm);
        Ok(total)
    }

    /// Independent copy of this context, including everything appended so far
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Replace this context's state with a copy of `source`'s.
    ///
    /// Both contexts must have been created for the same algorithm.
    pub fn assign(&mut self, source: &DigestContext) -> Result<()> {
        if self.algorithm != source.algorithm {
            return Err(
                ValidationError::algorithm_mismatch(self.algorithm, source.algorithm).into(),
            );
        }
        log::trace!("assigning {} context state", self.algorithm);
        self.backend = source.backend.box_clone();
        Ok(())
    }

    /// Digest of everything appended so far
    pub fn finalize(&self) -> Digest {
        Digest::new(self.algorithm, self.backend.box_clone().finalize_boxed())
    }

    /// Write the first `out.len()` bytes of the digest into `out`
    pub fn finalize_into(&self, out: &mut [u8]) -> Result<()> {
        let available = self.algorithm.length();
        if out.len() > available {
            return Err(ValidationError::invalid_output_length(out.len(), available).into());
        }
        let digest = self.finalize();
        out.copy_from_slice(&digest.as_bytes()[..out.len()]);
        Ok(())
    }
}

impl Default for DigestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DigestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestContext")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::hashing::one_shot;
    use std::io::Cursor;

    #[test]
    fn test_default_context_is_sha1() {
        assert_eq!(DigestContext::new().algorithm(), AlgorithmId::Sha1);
        assert_eq!(DigestContext::default().algorithm(), AlgorithmId::Sha1);
    }

    #[test]
    fn test_finalize_without_input() {
        for alg in AlgorithmId::ALL {
            let ctx = DigestContext::create(alg);
            assert_eq!(ctx.finalize(), one_shot(alg, b""));
        }
    }

    #[test]
    fn test_finalize_is_repeatable() {
        let mut ctx = DigestContext::create(AlgorithmId::Sha256);
        ctx.update(b"hello");

        let first = ctx.finalize();
        let second = ctx.finalize();
        assert_eq!(first, second);
    }

    #[test]
    fn test_finalize_does_not_stop_updates() {
        let mut ctx = DigestContext::create(AlgorithmId::Sha512);
        ctx.update(b"hello");
        let before = ctx.finalize();

        ctx.update(b" world");
        let after = ctx.finalize();

        assert_ne!(before, after);
        assert_eq!(after, one_shot(AlgorithmId::Sha512, b"hello world"));
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut original = DigestContext::create(AlgorithmId::Sha3_256);
        original.update(b"common prefix ");

        let mut copy = original.duplicate();
        assert_eq!(original.finalize(), copy.finalize());

        original.update(b"left");
        copy.update(b"right");

        assert_ne!(original.finalize(), copy.finalize());
        assert_eq!(
            original.finalize(),
            one_shot(AlgorithmId::Sha3_256, b"common prefix left")
        );
        assert_eq!(
            copy.finalize(),
            one_shot(AlgorithmId::Sha3_256, b"common prefix right")
        );
    }

    #[test]
    fn test_assign_copies_state() {
        let mut source = DigestContext::create(AlgorithmId::Sha256);
        source.update(b"source data");

        let mut target = DigestContext::create(AlgorithmId::Sha256);
        target.update(b"something else entirely");
        target.assign(&source).unwrap();
        assert_eq!(target.finalize(), source.finalize());

        // Later updates to the source must not leak into the target
        source.update(b" more");
        assert_ne!(target.finalize(), source.finalize());
    }

    #[test]
    fn test_assign_rejects_mismatched_algorithms() {
        let source = DigestContext::create(AlgorithmId::Sha512);
        let mut target = DigestContext::create(AlgorithmId::Sha3_512);
        target.update(b"kept");
        let before = target.finalize();

        let error = target.assign(&source).unwrap_err();
        assert!(matches!(
            error,
            Error::Validation(ValidationError::AlgorithmMismatch {
                expected: AlgorithmId::Sha3_512,
                found: AlgorithmId::Sha512,
            })
        ));
        assert_eq!(target.finalize(), before);
    }

    #[test]
    fn test_finalize_into_truncates() {
        let mut ctx = DigestContext::create(AlgorithmId::Sha256);
        ctx.update(b"abc");
        let full = ctx.finalize();

        let mut out = [0u8; 16];
        ctx.finalize_into(&mut out).unwrap();
        assert_eq!(&out[..], &full.as_bytes()[..16]);

        let mut exact = [0u8; 32];
        ctx.finalize_into(&mut exact).unwrap();
        assert_eq!(&exact[..], full.as_bytes());
    }

    #[test]
    fn test_finalize_into_rejects_oversized_buffer() {
        let ctx = DigestContext::create(AlgorithmId::Sha1);
        let mut out = [0u8; 21];
        let error = ctx.finalize_into(&mut out).unwrap_err();
        assert!(matches!(
            error,
            Error::Validation(ValidationError::InvalidOutputLength {
                requested: 21,
                available: 20,
            })
        ));
    }

    #[test]
    fn test_update_reader_matches_one_shot() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let mut ctx = DigestContext::create(AlgorithmId::Sha1);

        let read = ctx
            .update_reader(&mut Cursor::new(&data), &StreamConfig::test())
            .unwrap();

        assert_eq!(read, data.len() as u64);
        assert_eq!(ctx.finalize(), one_shot(AlgorithmId::Sha1, &data));
    }

    #[test]
    fn test_update_reader_rejects_zero_buffer() {
        let mut ctx = DigestContext::new();
        let config = StreamConfig { buffer_size: 0 };
        assert!(ctx.update_reader(&mut Cursor::new(b"x"), &config).is_err());
    }

    #[test]
    fn test_update_chains() {
        let mut ctx = DigestContext::create(AlgorithmId::Sha256);
        ctx.update(b"a").update(b"b").update(b"c");
        assert_eq!(ctx.finalize(), one_shot(AlgorithmId::Sha256, b"abc"));
    }

    #[test]
    fn test_context_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<DigestContext>();
    }
}
