//! SHAKE256 extendable-output function
//!
//! The sponge has two phases. While absorbing it accepts input; once any
//! output has been squeezed it only produces output, and every squeeze
//! continues the same stream. [`Shake256Absorb`] and [`Shake256Squeeze`]
//! encode the phases as types, so absorbing after squeezing does not compile:
//!
//! ```compile_fail
//! use cdigest_core::Shake256Absorb;
//!
//! let mut xof = Shake256Absorb::new();
//! xof.absorb(b"input");
//! let (mut reader, _out) = xof.squeeze(32);
//! reader.absorb(b"more input");
//! ```
//!
//! [`XofContext`] wraps both phases in one value for callers that cannot
//! track the phase statically; it reports a late absorb as
//! [`ValidationError::InvalidPhase`].

use crate::{Result, error::ValidationError};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use std::fmt;

/// SHAKE256 sponge accepting input
#[derive(Default)]
pub struct Shake256Absorb {
    state: sha3::Shake256,
}

impl Shake256Absorb {
    /// Create an empty sponge
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb more input
    pub fn absorb(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.state.update(data.as_ref());
        self
    }

    /// Finish absorbing and switch to output
    pub fn into_squeezing(self) -> Shake256Squeeze {
        Shake256Squeeze {
            reader: self.state.finalize_xof(),
        }
    }

    /// Switch to output and read the first `len` bytes
    pub fn squeeze(self, len: usize) -> (Shake256Squeeze, Vec<u8>) {
        let mut reader = self.into_squeezing();
        let out = reader.squeeze(len);
        (reader, out)
    }
}

impl fmt::Debug for Shake256Absorb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shake256Absorb").finish_non_exhaustive()
    }
}

/// SHAKE256 sponge producing output
pub struct Shake256Squeeze {
    reader: sha3::Shake256Reader,
}

impl Shake256Squeeze {
    /// Read the next `len` output bytes
    pub fn squeeze(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.squeeze_into(&mut out);
        out
    }

    /// Fill `out` with the next output bytes
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        self.reader.read(out);
    }
}

impl fmt::Debug for Shake256Squeeze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shake256Squeeze").finish_non_exhaustive()
    }
}

/// Phase of an [`XofContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XofPhase {
    Absorbing,
    Squeezing,
}

enum XofState {
    Absorbing(Shake256Absorb),
    Squeezing(Shake256Squeeze),
}

/// SHAKE256 context with a runtime-checked phase
pub struct XofContext {
    state: XofState,
}

impl XofContext {
    /// Create a context in the absorbing phase
    pub fn new() -> Self {
        Self {
            state: XofState::Absorbing(Shake256Absorb::new()),
        }
    }

    /// Current phase
    pub fn phase(&self) -> XofPhase {
        match self.state {
            XofState::Absorbing(_) => XofPhase::Absorbing,
            XofState::Squeezing(_) => XofPhase::Squeezing,
        }
    }

    /// Absorb more input; fails once any output has been squeezed
    pub fn absorb(&mut self, data: impl AsRef<[u8]>) -> Result<()> {
        match &mut self.state {
            XofState::Absorbing(sponge) => {
                sponge.absorb(data);
                Ok(())
            }
            XofState::Squeezing(_) => Err(ValidationError::InvalidPhase.into()),
        }
    }

    /// Read the next `len` output bytes, switching to the squeezing phase
    pub fn squeeze(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.squeeze_into(&mut out);
        out
    }

    /// Fill `out` with the next output bytes, switching to the squeezing phase
    pub fn squeeze_into(&mut self, out: &mut [u8]) {
        let placeholder = XofState::Absorbing(Shake256Absorb::new());
        let state = std::mem::replace(&mut self.state, placeholder);
        let mut reader = match state {
            XofState::Absorbing(sponge) => {
                log::trace!("xof switching to squeezing phase");
                sponge.into_squeezing()
            }
            XofState::Squeezing(reader) => reader,
        };
        reader.squeeze_into(out);
        self.state = XofState::Squeezing(reader);
    }
}

impl Default for XofContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for XofContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XofContext")
            .field("phase", &self.phase())
            .finish_non_exhaustive()
    }
}
