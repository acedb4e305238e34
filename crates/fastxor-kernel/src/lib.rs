//! XOR kernels for equal-length byte buffers.
//!
//! Two entry points compute `out[i] = a[i] ^ b[i]` into a freshly allocated
//! buffer:
//!
//! - [`xor_aligned`] - strict mode. Both buffers must have the same length and
//!   that length must be a whole number of 8-byte words.
//! - [`xor_flexible`] - general mode. Any equal-length pair is accepted,
//!   including empty buffers. Whole words are processed first, then the
//!   trailing bytes one at a time.
//!
//! Both use the widest vector instructions the CPU supports for the bulk of
//! the work. The result is bit-identical to a byte-by-byte XOR whichever
//! strategy runs; [`capabilities`] reports which one that is.
//!
//! # Example
//!
//! ```
//! use fastxor_kernel::{xor_aligned, xor_flexible, Error};
//!
//! let key = b"Secret Key 12345";
//! let msg = b"Hello World!!!!!";
//!
//! let sealed = xor_aligned(msg, key)?;
//! assert_eq!(xor_aligned(&sealed, key)?, msg);
//!
//! // Strict mode rejects partial words, flexible mode does not
//! assert!(matches!(
//!     xor_aligned(b"1234567", b"1234567"),
//!     Err(Error::Unaligned { len: 7, word_size: 8 })
//! ));
//! assert_eq!(xor_flexible(b"1234567", b"1234567")?, [0u8; 7]);
//! # Ok::<(), fastxor_kernel::Error>(())
//! ```

mod aligned;
mod caps;
mod flexible;
mod validate;

pub mod reference;

pub use aligned::{xor_aligned, xor_aligned_into};
pub use caps::{capabilities, Capabilities, DESCRIPTION, VERSION};
pub use flexible::{xor_flexible, xor_flexible_into};
pub use validate::AlignedPair;

pub use fastxor_common::{Error, Result, Strategy, WORD_BITS, WORD_SIZE};
