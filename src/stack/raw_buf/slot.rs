// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::Stack;

impl<T> Stack<T> {
    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, `ptr[..len]` are initialized and owned by us,
        // and `ptr` is non-null and aligned (dangling is fine for ZSTs).
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Caller guarantees `len < cap`.
    #[inline]
    pub(crate) fn write_top(&mut self, item: T) {
        debug_assert!(self.len < self.cap);
        // SAFETY: `len < cap`, so slot `len` lies inside the allocation and is
        // currently uninitialized; writing does not drop anything.
        unsafe { self.ptr.as_ptr().add(self.len).write(item) };
        self.len += 1;
    }

    #[inline]
    pub(crate) fn take_top(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: Before decrementing, `ptr[..old_len]` were initialized, so
        // slot `len` holds a valid `T`. Shrinking `len` first means the slot is
        // treated as uninitialized from here on, so the value is moved out
        // exactly once.
        Some(unsafe { self.ptr.as_ptr().add(self.len).read() })
    }
}
