//! fastxor - high-performance XOR of equal-length byte buffers.
//!
//! This crate provides a unified interface to the fastxor crates.
//!
//! # Crates
//!
//! - [`fastxor_common`] - Errors, word views and vector lane kernels
//! - [`fastxor_kernel`] - Strict and flexible XOR entry points, capability report
//!
//! # Example
//!
//! ```
//! use fastxor::prelude::*;
//!
//! // Whole words: strict mode
//! let data = b"12345678".repeat(16);
//! let key = b"abcdefgh".repeat(16);
//! let sealed = xor_aligned(&data, &key)?;
//! assert_eq!(sealed.len(), 128);
//!
//! // Any length: flexible mode
//! let sealed = xor_flexible(b"Hello, World!", b"Secret Key123")?;
//! assert_eq!(xor_flexible(&sealed, b"Secret Key123")?, b"Hello, World!");
//!
//! println!("{}", capabilities());
//! # Ok::<(), fastxor::Error>(())
//! ```

// Re-export all sub-crates
pub use fastxor_common as common;
pub use fastxor_kernel as kernel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fastxor_common::{Error, Result, Strategy, WORD_BITS, WORD_SIZE};
    pub use fastxor_kernel::reference::xor_bytewise;
    pub use fastxor_kernel::{
        capabilities, xor_aligned, xor_aligned_into, xor_flexible, xor_flexible_into,
        AlignedPair, Capabilities,
    };
}

// Re-export commonly used items at the crate root
pub use fastxor_common::{Error, Result};
pub use fastxor_kernel::{capabilities, xor_aligned, xor_flexible, Capabilities};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
