// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity limits and the grow/shrink policy shared by both backends.
//!
//! Starting from [`INITIAL_CAPACITY`], capacities only ever double or halve.
//! That keeps every capacity a power of two in
//! `INITIAL_CAPACITY..=MAX_CAPACITY`.

/// Hard ceiling on the number of elements a stack may hold.
pub const MAX_CAPACITY: usize = 32768;

/// Slot count allocated by a fresh stack, and the floor for shrinking.
pub const INITIAL_CAPACITY: usize = 16;

/// Default per-element byte limit for [`StringStack`](crate::StringStack).
pub const MAX_ELEMENT_BYTE_SIZE: usize = 256;

/// Capacity to grow to once a buffer of `cap` slots is full.
#[inline]
pub(crate) const fn grow_target(cap: usize) -> usize {
    let doubled = cap.saturating_mul(2);
    if doubled > MAX_CAPACITY {
        MAX_CAPACITY
    } else {
        doubled
    }
}

/// Capacity to shrink to after a pop leaves `len` live elements, if any.
///
/// Halves only once occupancy falls to a quarter, so the halved buffer still
/// has room for `len` plus the same number again before it regrows.
#[inline]
pub(crate) const fn shrink_target(cap: usize, len: usize) -> Option<usize> {
    if len > cap / 4 {
        return None;
    }
    let halved = cap / 2;
    let target = if halved < INITIAL_CAPACITY {
        INITIAL_CAPACITY
    } else {
        halved
    };
    if target < cap { Some(target) } else { None }
}
