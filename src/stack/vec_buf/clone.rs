// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::Stack;

// Alloc imports
use alloc::vec::Vec;

impl<T: Clone> Clone for Stack<T> {
    /// Clones the live elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.cap);
        buf.extend_from_slice(&self.buf);
        Self { buf, cap: self.cap }
    }
}
