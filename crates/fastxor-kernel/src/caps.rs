//! Capability report.

use std::fmt;

use fastxor_common::{Strategy, WORD_BITS, WORD_SIZE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line description of the implementation.
pub const DESCRIPTION: &str = "Fast 64-bit XOR operations";

/// Static description of how the kernels run on this machine.
///
/// Purely informational. Nothing needs to query it before calling the
/// kernels, and the reported strategy never changes results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Capabilities {
    /// Word size in bytes used by the strict kernel.
    pub word_size: usize,
    /// Word size in bits.
    pub word_bits: u32,
    /// Length multiple required by [`xor_aligned`](crate::xor_aligned).
    pub alignment: usize,
    /// Strategy used for the bulk of every XOR.
    pub strategy: Strategy,
    /// Bytes combined per operation of `strategy`.
    pub lane_width: usize,
    pub version: &'static str,
    pub description: &'static str,
}

impl Capabilities {
    #[inline]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fastxor {}: {} strategy, {}-byte lanes, {}-bit words",
            self.version, self.strategy, self.lane_width, self.word_bits
        )
    }
}

/// Report the word size, version and active strategy. Never fails.
pub fn capabilities() -> Capabilities {
    let strategy = Strategy::active();

    Capabilities {
        word_size: WORD_SIZE,
        word_bits: WORD_BITS,
        alignment: WORD_SIZE,
        strategy,
        lane_width: strategy.lane_width(),
        version: VERSION,
        description: DESCRIPTION,
    }
}
