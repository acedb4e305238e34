//! Naive byte-by-byte XOR.
//!
//! The oracle the kernels are checked against in tests, benchmarks and the
//! CLI. It zips the inputs, so a longer buffer is truncated to the shorter.

/// XOR two buffers one byte at a time.
pub fn xor_bytewise(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_bytewise() {
        assert_eq!(xor_bytewise(&[0xFF, 0x00, 0x0F], &[0x0F, 0x0F, 0x0F]), [0xF0, 0x0F, 0x00]);
        assert!(xor_bytewise(&[], &[]).is_empty());
    }

    #[test]
    fn test_xor_bytewise_truncates() {
        assert_eq!(xor_bytewise(b"abc", b"ab").len(), 2);
    }
}
