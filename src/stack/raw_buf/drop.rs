// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::alloc_buf;
use crate::stack::Stack;

// Core imports
use core::ptr;

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // SAFETY: `ptr[..len]` are initialized and never used again. Setting
        // `len = 0` first means a panicking element drop cannot cause a
        // double drop.
        unsafe {
            let live = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len);
            self.len = 0;
            ptr::drop_in_place(live);
        }
        // SAFETY: `ptr` owns an allocation of `cap` slots, and all of its
        // elements were dropped above.
        unsafe { alloc_buf::deallocate(self.ptr, self.cap) }
    }
}
