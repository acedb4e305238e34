//! The 64-bit word and zero-copy word views over byte slices.
//!
//! A [`Word`] is a native-endian `u64` with an alignment of 1, so any byte
//! slice whose length is a multiple of [`WORD_SIZE`] can be viewed as a slice
//! of words regardless of where it starts in memory.

use zerocopy::byteorder::{NativeEndian, U64};
use zerocopy::FromBytes;

use crate::{Error, Result};

/// Size of one word in bytes.
pub const WORD_SIZE: usize = 8;

/// Size of one word in bits.
pub const WORD_BITS: u32 = 64;

/// Native-endian 64-bit word with no alignment requirement.
pub type Word = U64<NativeEndian>;

/// Split a length into whole words and trailing bytes.
///
/// `full_words * WORD_SIZE + tail == len` always holds.
#[inline]
pub const fn split_len(len: usize) -> (usize, usize) {
    (len / WORD_SIZE, len % WORD_SIZE)
}

/// Check that a length is a whole number of words.
#[inline]
pub const fn check_len(len: usize) -> Result<()> {
    if len % WORD_SIZE != 0 {
        return Err(Error::Unaligned {
            len,
            word_size: WORD_SIZE,
        });
    }
    Ok(())
}

/// View a byte slice as words.
///
/// Fails with [`Error::Unaligned`] if the length is not a multiple of
/// [`WORD_SIZE`].
#[inline]
pub fn as_words(bytes: &[u8]) -> Result<&[Word]> {
    check_len(bytes.len())?;
    <[Word]>::ref_from_bytes(bytes).map_err(|_| Error::Unaligned {
        len: bytes.len(),
        word_size: WORD_SIZE,
    })
}

/// XOR two word slices into `out`, one word at a time.
///
/// Each result word is stored in native byte order, so the output is
/// byte-for-byte identical to XOR-ing the same bytes individually. Processes
/// as many words as fit in all three buffers.
#[inline]
pub fn xor_words(a: &[Word], b: &[Word], out: &mut [u8]) {
    for ((o, x), y) in out.chunks_exact_mut(WORD_SIZE).zip(a).zip(b) {
        o.copy_from_slice(&(x.get() ^ y.get()).to_ne_bytes());
    }
}

/// XOR two byte slices one byte at a time into `out`.
#[inline]
pub fn xor_bytes(a: &[u8], b: &[u8], out: &mut [u8]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x ^ y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_len() {
        assert_eq!(split_len(0), (0, 0));
        assert_eq!(split_len(7), (0, 7));
        assert_eq!(split_len(8), (1, 0));
        assert_eq!(split_len(9), (1, 1));
        for len in 0..100 {
            let (words, tail) = split_len(len);
            assert_eq!(words * WORD_SIZE + tail, len);
        }
    }

    #[test]
    fn test_as_words_rejects_partial_word() {
        let data = [0u8; 7];
        assert_eq!(
            as_words(&data),
            Err(Error::Unaligned { len: 7, word_size: 8 })
        );
    }

    #[test]
    fn test_as_words_is_native_endian() {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        let words = as_words(&data).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].get(), u64::from_ne_bytes([1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(
            words[1].get(),
            u64::from_ne_bytes([9, 10, 11, 12, 13, 14, 15, 16])
        );
    }

    #[test]
    fn test_as_words_any_address() {
        let backing: Vec<u8> = (0..33u8).collect();
        for offset in 0..8 {
            let slice = &backing[offset..offset + 24];
            let words = as_words(slice).unwrap();
            assert_eq!(words.len(), 3);
            assert_eq!(
                words[0].get(),
                u64::from_ne_bytes(slice[..8].try_into().unwrap())
            );
        }
    }

    #[test]
    fn test_xor_words_matches_bytes() {
        let a: Vec<u8> = (0..64u8).collect();
        let b: Vec<u8> = (0..64u8).map(|x| x.wrapping_mul(37).wrapping_add(11)).collect();

        let mut by_word = vec![0u8; 64];
        xor_words(as_words(&a).unwrap(), as_words(&b).unwrap(), &mut by_word);

        let mut by_byte = vec![0u8; 64];
        xor_bytes(&a, &b, &mut by_byte);

        assert_eq!(by_word, by_byte);
    }
}
