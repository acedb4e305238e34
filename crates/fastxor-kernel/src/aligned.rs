//! Strict word-aligned XOR.

use fastxor_common::{simd, word, Result, WORD_SIZE};

use crate::validate::{check_output, AlignedPair};

/// XOR two buffers whose common length is a multiple of 8 bytes.
///
/// Fails with [`Error::LengthMismatch`](crate::Error::LengthMismatch) if the
/// lengths differ, otherwise with [`Error::Unaligned`](crate::Error::Unaligned)
/// if the length is not a whole number of words. Use
/// [`xor_flexible`](crate::xor_flexible) for arbitrary lengths.
pub fn xor_aligned(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    Ok(AlignedPair::new(a, b)?.xor())
}

/// Strict XOR into a caller-supplied buffer of the same length.
///
/// `out` is not touched when validation fails.
pub fn xor_aligned_into(a: &[u8], b: &[u8], out: &mut [u8]) -> Result<()> {
    AlignedPair::new(a, b)?.xor_into(out)
}

impl AlignedPair<'_> {
    /// XOR the pair into a new buffer.
    pub fn xor(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.len()];
        self.write(&mut out);
        out
    }

    /// XOR the pair into `out`, which must be exactly [`len`](Self::len) bytes.
    pub fn xor_into(&self, out: &mut [u8]) -> Result<()> {
        check_output(self.len(), out)?;
        self.write(out);
        Ok(())
    }

    /// Vector lanes first, then whole words. No partial words exist.
    pub(crate) fn write(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.len());

        let done = simd::xor_lanes(self.left(), self.right(), out);
        let first = done / WORD_SIZE;
        word::xor_words(
            &self.left_words()[first..],
            &self.right_words()[first..],
            &mut out[done..],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::xor_bytewise;
    use crate::Error;

    #[test]
    fn test_xor_aligned_basic() {
        let a = b"12345678".repeat(16);
        let b = b"abcdefgh".repeat(16);
        let out = xor_aligned(&a, &b).unwrap();
        assert_eq!(out.len(), 128);
        assert_eq!(out, xor_bytewise(&a, &b));
    }

    #[test]
    fn test_xor_aligned_empty() {
        assert_eq!(xor_aligned(b"", b"").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_xor_aligned_rejects_seven_bytes() {
        assert_eq!(
            xor_aligned(b"1234567", b"1234567"),
            Err(Error::Unaligned { len: 7, word_size: 8 })
        );
    }

    #[test]
    fn test_xor_aligned_mismatch_first() {
        assert_eq!(
            xor_aligned(b"1234567", b"12345678"),
            Err(Error::LengthMismatch { left: 7, right: 8 })
        );
        assert_eq!(
            xor_aligned(b"12345678", b"1234567890"),
            Err(Error::LengthMismatch { left: 8, right: 10 })
        );
    }

    #[test]
    fn test_xor_aligned_lane_boundaries() {
        // Sizes around every lane width and the unrolled AVX2 block
        for words in [1, 2, 3, 4, 5, 15, 16, 17, 31, 32, 33, 100] {
            let len = words * WORD_SIZE;
            let a: Vec<u8> = (0..len).map(|i| (i * 7) as u8).collect();
            let b: Vec<u8> = (0..len).map(|i| (i * 13 + 5) as u8).collect();
            assert_eq!(xor_aligned(&a, &b).unwrap(), xor_bytewise(&a, &b), "len {}", len);
        }
    }

    #[test]
    fn test_xor_aligned_unaligned_addresses() {
        let backing: Vec<u8> = (0..80u8).collect();
        let key = [0x5Au8; 64];
        for offset in 0..8 {
            let data = &backing[offset..offset + 64];
            assert_eq!(xor_aligned(data, &key).unwrap(), xor_bytewise(data, &key));
        }
    }

    #[test]
    fn test_xor_aligned_into() {
        let a = [0xF0u8; 16];
        let b = [0x0Fu8; 16];
        let mut out = [0u8; 16];
        xor_aligned_into(&a, &b, &mut out).unwrap();
        assert_eq!(out, [0xFFu8; 16]);
    }

    #[test]
    fn test_xor_aligned_into_leaves_output_on_error() {
        let mut out = [0xAAu8; 8];
        assert!(xor_aligned_into(b"1234567", b"1234567", &mut out[..7]).is_err());
        assert_eq!(
            xor_aligned_into(b"12345678", b"abcdefgh", &mut out[..7]),
            Err(Error::OutputLength {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(out, [0xAAu8; 8]);
    }
}
