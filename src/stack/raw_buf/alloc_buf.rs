// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, mem::size_of, ptr::NonNull};

/// Layout of a buffer with `cap` slots of `T`.
#[inline]
pub(super) fn layout_for<T>(cap: usize) -> Result<Layout, Error> {
    Layout::array::<T>(cap).map_err(|_| Error::OutOfMemory)
}

/// Allocates an uninitialized buffer of `cap` slots.
///
/// `cap` must be non-zero. Zero-sized `T` gets a dangling pointer.
pub(super) fn allocate<T>(cap: usize) -> Result<NonNull<T>, Error> {
    debug_assert!(cap > 0);
    if size_of::<T>() == 0 {
        return Ok(NonNull::dangling());
    }
    let layout = layout_for::<T>(cap)?;
    // SAFETY: `cap > 0` and `T` is not zero-sized, so `layout` has a non-zero size.
    let raw = unsafe { alloc::alloc::alloc(layout) };
    NonNull::new(raw.cast::<T>()).ok_or(Error::OutOfMemory)
}

/// Frees a buffer previously returned by [`allocate`] (or resized to `cap`).
///
/// # Safety
///
/// `ptr` must own a live allocation of exactly `cap` slots of `T`, and no
/// element in it may be used afterwards.
pub(super) unsafe fn deallocate<T>(ptr: NonNull<T>, cap: usize) {
    if size_of::<T>() == 0 {
        return;
    }
    if let Ok(layout) = layout_for::<T>(cap) {
        // SAFETY: the caller guarantees `ptr` was allocated with this layout.
        unsafe { alloc::alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) }
    }
}
