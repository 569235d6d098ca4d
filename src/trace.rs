// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional `tracing` events for buffer reallocation.
//!
//! Without the `tracing` feature these are empty inline functions.

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn resized(from: usize, to: usize, len: usize) {
    tracing::trace!(from, to, len, "stack buffer reallocated");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn resized(_from: usize, _to: usize, _len: usize) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn shrink_skipped(cap: usize, target: usize, len: usize) {
    tracing::debug!(cap, target, len, "stack shrink failed; keeping larger buffer");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn shrink_skipped(_cap: usize, _target: usize, _len: usize) {}
