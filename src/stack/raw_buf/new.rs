// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use super::alloc_buf;
use crate::{capacity::INITIAL_CAPACITY, error::Error, stack::Stack};

// Core imports
use core::marker::PhantomData;

impl<T> Stack<T> {
    /// Creates an empty stack with [`INITIAL_CAPACITY`] slots.
    ///
    /// Returns [`Error::OutOfMemory`] if the buffer cannot be allocated.
    #[inline]
    pub fn try_new() -> Result<Self, Error> {
        let ptr = alloc_buf::allocate::<T>(INITIAL_CAPACITY)?;
        Ok(Self {
            ptr,
            cap: INITIAL_CAPACITY,
            len: 0,
            _owns: PhantomData,
        })
    }
}
