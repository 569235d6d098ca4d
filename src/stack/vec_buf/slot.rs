// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::Stack;

impl<T> Stack<T> {
    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Caller guarantees `len < cap`, so this never touches the allocator.
    #[inline]
    pub(crate) fn write_top(&mut self, item: T) {
        debug_assert!(self.buf.len() < self.cap);
        self.buf.push(item);
    }

    #[inline]
    pub(crate) fn take_top(&mut self) -> Option<T> {
        self.buf.pop()
    }
}
