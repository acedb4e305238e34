//! Common types for fastxor.
//!
//! This crate provides the foundations shared by the XOR kernels:
//!
//! - [`Error`] - Validation errors for buffer pairs
//! - [`word`] - The fixed 64-bit word and zero-copy word views over byte slices
//! - [`simd`] - Vector lane kernels (AVX2, SSE2, NEON) and strategy detection

mod error;

pub mod simd;
pub mod word;

pub use error::{Error, Result};
pub use simd::Strategy;
pub use word::{Word, WORD_BITS, WORD_SIZE};

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, IntoBytes};
