// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::alloc_buf::layout_for;
use crate::{error::Error, stack::Stack};

// Core imports
use core::{mem::size_of, ptr::NonNull};

impl<T> Stack<T> {
    /// Resizes the buffer to exactly `new_cap` slots, keeping `ptr[..len]`.
    ///
    /// On error the old allocation is still valid and `cap` is untouched.
    pub(crate) fn reallocate(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len && new_cap > 0);
        if size_of::<T>() != 0 {
            let old = layout_for::<T>(self.cap)?;
            let new = layout_for::<T>(new_cap)?;
            // SAFETY: `ptr` was allocated by the global allocator with `old`,
            // `new.size()` is non-zero, and `new` keeps `T`'s alignment.
            // `realloc` preserves the first `min(old, new)` bytes, which cover
            // `ptr[..len]` because `new_cap >= len`.
            let raw = unsafe {
                alloc::alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old, new.size())
            };
            // A null return leaves the old block allocated, and `ptr` still
            // points at it.
            self.ptr = NonNull::new(raw.cast::<T>()).ok_or(Error::OutOfMemory)?;
        }
        self.cap = new_cap;
        Ok(())
    }
}
