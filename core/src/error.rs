//! Errors signaled by the library itself.
//!
//! Failures raised by caller-supplied closures are never wrapped in
//! [`SeqError`]: the `try_*` operations hand back the closure's own error
//! type unchanged.

use thiserror::Error;

/// Invalid input detected while reducing a sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// Checked accumulation overflowed the element type.
    #[error("arithmetic overflow while accumulating element at index {index}")]
    Overflow { index: usize },

    /// The sequence length does not fit in the element type, so it cannot be
    /// used as a divisor.
    #[error("sequence length {len} is not representable in the element type")]
    LengthNotRepresentable { len: usize },
}

pub type Result<T, E = SeqError> = core::result::Result<T, E>;
