//! Vector lane kernels and strategy selection.
//!
//! The kernels here XOR the longest prefix of a buffer pair that fits whole
//! vector lanes and report how many bytes they covered. Callers finish the
//! remainder with the word loop and the byte tail.
//!
//! Architecture support:
//! - x86_64: AVX2 (32 bytes), SSE2 (16 bytes)
//! - aarch64: NEON (16 bytes)
//! - Fallback: plain 64-bit words, no vector lanes
//!
//! Vector strategies are only compiled with the `simd` feature.

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use std::arch::x86_64::*;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
use std::arch::aarch64::*;

use std::fmt;
use std::sync::OnceLock;

use crate::word::WORD_SIZE;

/// Instruction strategy used for the bulk of a XOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    /// Plain 64-bit words.
    Word64,
    /// 128-bit SSE2 registers.
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    Sse2,
    /// 256-bit AVX2 registers.
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    Avx2,
    /// 128-bit NEON registers.
    #[cfg(all(feature = "simd", target_arch = "aarch64"))]
    Neon,
}

impl Strategy {
    /// Probe the CPU for the widest strategy it supports.
    pub fn detect() -> Self {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            if is_x86_feature_detected!("avx2") {
                return Self::Avx2;
            }
            if is_x86_feature_detected!("sse2") {
                return Self::Sse2;
            }
        }

        #[cfg(all(feature = "simd", target_arch = "aarch64"))]
        {
            // NEON is always available on aarch64
            return Self::Neon;
        }

        #[allow(unreachable_code)]
        Self::Word64
    }

    /// The strategy used by [`xor_lanes`], detected once per process.
    pub fn active() -> Self {
        static ACTIVE: OnceLock<Strategy> = OnceLock::new();

        *ACTIVE.get_or_init(|| {
            let strategy = Self::detect();
            log::debug!(
                "fastxor: using {} strategy ({} bytes per lane)",
                strategy,
                strategy.lane_width()
            );
            strategy
        })
    }

    /// Every strategy this CPU can execute, narrowest first.
    pub fn available() -> Vec<Self> {
        #[allow(unused_mut)]
        let mut strategies = vec![Self::Word64];

        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            if is_x86_feature_detected!("sse2") {
                strategies.push(Self::Sse2);
            }
            if is_x86_feature_detected!("avx2") {
                strategies.push(Self::Avx2);
            }
        }

        #[cfg(all(feature = "simd", target_arch = "aarch64"))]
        strategies.push(Self::Neon);

        strategies
    }

    /// Whether this CPU can execute the strategy.
    #[inline]
    pub fn is_supported(self) -> bool {
        match self {
            Self::Word64 => true,
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            Self::Sse2 => is_x86_feature_detected!("sse2"),
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            Self::Avx2 => is_x86_feature_detected!("avx2"),
            #[cfg(all(feature = "simd", target_arch = "aarch64"))]
            Self::Neon => true,
        }
    }

    /// Short lowercase identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Word64 => "word64",
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            Self::Sse2 => "sse2",
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            Self::Avx2 => "avx2",
            #[cfg(all(feature = "simd", target_arch = "aarch64"))]
            Self::Neon => "neon",
        }
    }

    /// Bytes combined by one operation of this strategy.
    pub const fn lane_width(self) -> usize {
        match self {
            Self::Word64 => WORD_SIZE,
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            Self::Sse2 => 16,
            #[cfg(all(feature = "simd", target_arch = "x86_64"))]
            Self::Avx2 => 32,
            #[cfg(all(feature = "simd", target_arch = "aarch64"))]
            Self::Neon => 16,
        }
    }

    /// Whether the strategy uses vector registers.
    #[inline]
    pub const fn is_vectorized(self) -> bool {
        !matches!(self, Self::Word64)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// XOR the longest whole-lane prefix using the active strategy.
///
/// Returns the number of bytes written to `out`, always a multiple of
/// [`WORD_SIZE`]. Returns 0 for [`Strategy::Word64`].
#[inline]
pub fn xor_lanes(a: &[u8], b: &[u8], out: &mut [u8]) -> usize {
    xor_lanes_with(Strategy::active(), a, b, out)
}

/// XOR the longest whole-lane prefix using a specific strategy.
///
/// Only `min(a.len(), b.len(), out.len())` bytes are considered. A strategy
/// the CPU cannot execute writes nothing and returns 0.
pub fn xor_lanes_with(strategy: Strategy, a: &[u8], b: &[u8], out: &mut [u8]) -> usize {
    let len = out.len().min(a.len()).min(b.len());
    let (a, b, out) = (&a[..len], &b[..len], &mut out[..len]);

    match strategy {
        Strategy::Word64 => 0,
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        Strategy::Sse2 => {
            if is_x86_feature_detected!("sse2") {
                unsafe { xor_lanes_sse2(a, b, out) }
            } else {
                0
            }
        }
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        Strategy::Avx2 => {
            if is_x86_feature_detected!("avx2") {
                unsafe { xor_lanes_avx2(a, b, out) }
            } else {
                0
            }
        }
        #[cfg(all(feature = "simd", target_arch = "aarch64"))]
        Strategy::Neon => unsafe { xor_lanes_neon(a, b, out) },
    }
}

// ============================================================================
// x86_64 implementations
// ============================================================================

// All lane kernels require `a`, `b` and `out` to have the same length.

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[target_feature(enable = "avx2")]
unsafe fn xor_lanes_avx2(a: &[u8], b: &[u8], out: &mut [u8]) -> usize {
    let len = out.len();
    let mut i = 0;

    // Four registers per iteration
    while i + 128 <= len {
        for k in (0..128).step_by(32) {
            let va = _mm256_loadu_si256(a.as_ptr().add(i + k) as *const __m256i);
            let vb = _mm256_loadu_si256(b.as_ptr().add(i + k) as *const __m256i);
            _mm256_storeu_si256(
                out.as_mut_ptr().add(i + k) as *mut __m256i,
                _mm256_xor_si256(va, vb),
            );
        }
        i += 128;
    }

    while i + 32 <= len {
        let va = _mm256_loadu_si256(a.as_ptr().add(i) as *const __m256i);
        let vb = _mm256_loadu_si256(b.as_ptr().add(i) as *const __m256i);
        _mm256_storeu_si256(
            out.as_mut_ptr().add(i) as *mut __m256i,
            _mm256_xor_si256(va, vb),
        );
        i += 32;
    }

    i
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[target_feature(enable = "sse2")]
unsafe fn xor_lanes_sse2(a: &[u8], b: &[u8], out: &mut [u8]) -> usize {
    let len = out.len();
    let mut i = 0;

    while i + 16 <= len {
        let va = _mm_loadu_si128(a.as_ptr().add(i) as *const __m128i);
        let vb = _mm_loadu_si128(b.as_ptr().add(i) as *const __m128i);
        _mm_storeu_si128(out.as_mut_ptr().add(i) as *mut __m128i, _mm_xor_si128(va, vb));
        i += 16;
    }

    i
}

// ============================================================================
// ARM64 NEON implementations
// ============================================================================

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
#[target_feature(enable = "neon")]
unsafe fn xor_lanes_neon(a: &[u8], b: &[u8], out: &mut [u8]) -> usize {
    let len = out.len();
    let mut i = 0;

    while i + 16 <= len {
        let va = vld1q_u8(a.as_ptr().add(i));
        let vb = vld1q_u8(b.as_ptr().add(i));
        vst1q_u8(out.as_mut_ptr().add(i), veorq_u8(va, vb));
        i += 16;
    }

    i
}
