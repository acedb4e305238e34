//! Input validation for buffer pairs.
//!
//! Every check runs before any output byte is written.

use fastxor_common::word::{self, Word};
use fastxor_common::{Error, IntoBytes, Result, WORD_SIZE};

/// Check that both buffers have the same length, returning it.
#[inline]
pub(crate) fn check_equal_len(a: &[u8], b: &[u8]) -> Result<usize> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.len())
}

/// Check a caller-supplied output buffer against the input length.
#[inline]
pub(crate) fn check_output(len: usize, out: &[u8]) -> Result<()> {
    if out.len() != len {
        return Err(Error::OutputLength {
            expected: len,
            actual: out.len(),
        });
    }
    Ok(())
}

/// A pair of equal-length buffers that are both a whole number of words.
///
/// This is the only input the strict kernel accepts, so holding one proves
/// the strict preconditions were checked. Construction reports a length
/// mismatch before a partial word.
///
/// ```
/// use fastxor_kernel::AlignedPair;
///
/// let pair = AlignedPair::new(b"abcdefgh", b"ABCDEFGH")?;
/// assert_eq!(pair.words(), 1);
/// assert_eq!(pair.xor(), [0x20u8; 8]);
/// # Ok::<(), fastxor_kernel::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AlignedPair<'a> {
    left: &'a [Word],
    right: &'a [Word],
}

impl<'a> AlignedPair<'a> {
    /// Validate a buffer pair for the strict kernel.
    pub fn new(left: &'a [u8], right: &'a [u8]) -> Result<Self> {
        check_equal_len(left, right)?;
        Ok(Self {
            left: word::as_words(left)?,
            right: word::as_words(right)?,
        })
    }

    /// Length of each buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len() * WORD_SIZE
    }

    /// Whether both buffers are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Number of words in each buffer.
    #[inline]
    pub fn words(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn left(&self) -> &'a [u8] {
        IntoBytes::as_bytes(self.left)
    }

    #[inline]
    pub fn right(&self) -> &'a [u8] {
        IntoBytes::as_bytes(self.right)
    }

    #[inline]
    pub(crate) fn left_words(&self) -> &'a [Word] {
        self.left
    }

    #[inline]
    pub(crate) fn right_words(&self) -> &'a [Word] {
        self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_len() {
        assert_eq!(check_equal_len(b"", b""), Ok(0));
        assert_eq!(check_equal_len(b"abc", b"xyz"), Ok(3));
        assert_eq!(
            check_equal_len(b"1234567", b"12345678"),
            Err(Error::LengthMismatch { left: 7, right: 8 })
        );
    }

    #[test]
    fn test_output_len() {
        assert!(check_output(4, &[0u8; 4]).is_ok());
        assert_eq!(
            check_output(4, &[0u8; 5]),
            Err(Error::OutputLength {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_pair_mismatch_before_alignment() {
        // Neither length is a whole word, but the mismatch is reported
        let err = AlignedPair::new(b"1234567", b"123456789").unwrap_err();
        assert_eq!(err, Error::LengthMismatch { left: 7, right: 9 });
    }

    #[test]
    fn test_pair_rejects_partial_word() {
        let err = AlignedPair::new(b"1234567", b"1234567").unwrap_err();
        assert_eq!(err, Error::Unaligned { len: 7, word_size: 8 });
    }

    #[test]
    fn test_pair_accessors() {
        let a = [1u8; 24];
        let b = [2u8; 24];
        let pair = AlignedPair::new(&a, &b).unwrap();
        assert_eq!(pair.len(), 24);
        assert_eq!(pair.words(), 3);
        assert!(!pair.is_empty());
        assert_eq!(pair.left(), &a);
        assert_eq!(pair.right(), &b);

        let empty = AlignedPair::new(&[], &[]).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }
}
