//======================================================================
// src/error.rs
// Error types for cipher construction and rekeying.
//======================================================================

use core::fmt;

/// Invalid key or state size supplied to a constructor or rekey call.
///
/// Carries the rejected size exactly as the caller supplied it: bytes
/// for byte-keyed constructors, words times eight for word-keyed ones,
/// bits for [`Threefish::new_with_size`](crate::Threefish::new_with_size).
/// This is the only recoverable error in the crate; it is never raised
/// once a cipher has been constructed and keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySizeError(pub usize);

impl fmt::Display for KeySizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid Threefish key size {} (supported: 32, 64 or 128 bytes)",
            self.0
        )
    }
}

impl core::error::Error for KeySizeError {}
