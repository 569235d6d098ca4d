// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`Stack`](crate::Stack) and [`StringStack`](crate::StringStack).
//!
//! Every fallible operation reports one of these to its immediate caller.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The backing buffer could not be allocated or grown.
    ///
    /// A `push` that fails this way leaves the stack unchanged.
    OutOfMemory,
    /// The stack already holds [`MAX_CAPACITY`](crate::MAX_CAPACITY) elements.
    Full,
    /// `pop` was called on an empty stack.
    Empty,
    /// A variable-length element is longer than the per-element byte limit.
    ElementTooLarge {
        /// Length of the rejected element, in bytes.
        len: usize,
        /// The configured limit, in bytes.
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => f.write_str("out of memory"),
            Self::Full => f.write_str("stack has reached maximum capacity"),
            Self::Empty => f.write_str("cannot pop from empty stack"),
            Self::ElementTooLarge { len, max } => {
                write!(f, "element of {len} bytes exceeds limit of {max}")
            }
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::Empty);
        assert!(s.contains("empty"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::OutOfMemory.to_string(), "out of memory");
        assert_eq!(Error::Full.to_string(), "stack has reached maximum capacity");
        assert_eq!(
            Error::ElementTooLarge { len: 300, max: 256 }.to_string(),
            "element of 300 bytes exceeds limit of 256"
        );
    }
}
