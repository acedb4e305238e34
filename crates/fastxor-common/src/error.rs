//! Error types for fastxor-common.

use thiserror::Error;

/// Error returned when a buffer pair fails validation.
///
/// Every variant is detected before any output byte is written, so a failed
/// call never leaves a partially written result behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The two input buffers differ in length.
    #[error("buffer lengths differ: left is {left} bytes, right is {right} bytes")]
    LengthMismatch { left: usize, right: usize },

    /// Input length is not a whole number of words (strict mode only).
    #[error("buffer length {len} is not a multiple of the {word_size}-byte word size")]
    Unaligned { len: usize, word_size: usize },

    /// Caller-supplied output buffer does not match the input length.
    #[error("output buffer is {actual} bytes, expected {expected}")]
    OutputLength { expected: usize, actual: usize },
}

impl Error {
    /// True for [`Error::LengthMismatch`].
    #[inline]
    pub const fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }

    /// True for [`Error::Unaligned`].
    #[inline]
    pub const fn is_unaligned(&self) -> bool {
        matches!(self, Self::Unaligned { .. })
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_lengths() {
        let err = Error::LengthMismatch { left: 7, right: 8 };
        assert_eq!(
            err.to_string(),
            "buffer lengths differ: left is 7 bytes, right is 8 bytes"
        );

        let err = Error::Unaligned { len: 7, word_size: 8 };
        assert_eq!(
            err.to_string(),
            "buffer length 7 is not a multiple of the 8-byte word size"
        );
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Error::LengthMismatch { left: 1, right: 2 }.is_length_mismatch());
        assert!(!Error::LengthMismatch { left: 1, right: 2 }.is_unaligned());
        assert!(Error::Unaligned { len: 3, word_size: 8 }.is_unaligned());
        assert!(!Error::OutputLength { expected: 1, actual: 0 }.is_unaligned());
    }
}
