// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{capacity::INITIAL_CAPACITY, error::Error, stack::Stack};

// Alloc imports
use alloc::vec::Vec;

impl<T> Stack<T> {
    /// Creates an empty stack with [`INITIAL_CAPACITY`] slots.
    ///
    /// Returns [`Error::OutOfMemory`] if the buffer cannot be allocated.
    #[inline]
    pub fn try_new() -> Result<Self, Error> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| Error::OutOfMemory)?;
        Ok(Self {
            buf,
            cap: INITIAL_CAPACITY,
        })
    }
}
