// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::Stack};

// Alloc imports
use alloc::vec::Vec;

impl<T> Stack<T> {
    /// Resizes the buffer to exactly `new_cap` slots, keeping `buf[..len]`.
    ///
    /// On error the buffer, its contents, and `cap` are untouched.
    pub(crate) fn reallocate(&mut self, new_cap: usize) -> Result<(), Error> {
        if new_cap > self.cap {
            let additional = new_cap - self.buf.len();
            self.buf
                .try_reserve_exact(additional)
                .map_err(|_| Error::OutOfMemory)?;
        } else {
            // `Vec::shrink_to` aborts on failure, so move into a fresh buffer
            // instead and keep the old one if that allocation fails.
            let mut fresh = Vec::new();
            fresh
                .try_reserve_exact(new_cap)
                .map_err(|_| Error::OutOfMemory)?;
            fresh.append(&mut self.buf);
            self.buf = fresh;
        }
        self.cap = new_cap;
        Ok(())
    }
}
