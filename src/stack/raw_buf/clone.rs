// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::alloc_buf;
use crate::stack::Stack;

// Core imports
use core::{alloc::Layout, marker::PhantomData};

impl<T: Clone> Clone for Stack<T> {
    /// Clones the live elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let ptr = match alloc_buf::allocate::<T>(self.cap) {
            Ok(ptr) => ptr,
            Err(_) => alloc::alloc::handle_alloc_error(
                alloc_buf::layout_for::<T>(self.cap).unwrap_or(Layout::new::<T>()),
            ),
        };
        let mut out = Self {
            ptr,
            cap: self.cap,
            len: 0,
            _owns: PhantomData,
        };
        // If `T::clone` panics, `out` drops only what was written so far.
        for item in self.as_slice() {
            out.write_top(item.clone());
        }
        out
    }
}
