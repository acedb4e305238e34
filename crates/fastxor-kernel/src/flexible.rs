//! General XOR for any equal-length pair.

use fastxor_common::{word, Result, WORD_SIZE};

use crate::validate::{check_equal_len, check_output, AlignedPair};

/// XOR two buffers of any (equal) length.
///
/// Whole words go through the strict kernel and the `len % 8` trailing bytes
/// are combined one at a time. Empty input yields an empty result. Fails only
/// with [`Error::LengthMismatch`](crate::Error::LengthMismatch).
pub fn xor_flexible(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    let len = check_equal_len(a, b)?;
    let mut out = vec![0u8; len];
    write(a, b, &mut out)?;
    Ok(out)
}

/// General XOR into a caller-supplied buffer of the same length.
///
/// `out` is not touched when validation fails.
pub fn xor_flexible_into(a: &[u8], b: &[u8], out: &mut [u8]) -> Result<()> {
    let len = check_equal_len(a, b)?;
    check_output(len, out)?;
    write(a, b, out)
}

fn write(a: &[u8], b: &[u8], out: &mut [u8]) -> Result<()> {
    let (full_words, _) = word::split_len(out.len());
    let body = full_words * WORD_SIZE;

    let (a_body, a_tail) = a.split_at(body);
    let (b_body, b_tail) = b.split_at(body);
    let (out_body, out_tail) = out.split_at_mut(body);

    AlignedPair::new(a_body, b_body)?.write(out_body);
    word::xor_bytes(a_tail, b_tail, out_tail);

    Ok(())
}
