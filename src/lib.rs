// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-stack`
//!
//! A `no_std` (+`alloc`), heap-backed LIFO stack with automatic capacity
//! management and a hard size ceiling, **with no `unsafe` by default**.
//!
//! The core type, [`Stack<T>`], owns one contiguous buffer and a logical
//! length. A fresh stack has [`INITIAL_CAPACITY`] (16) slots. The buffer
//! doubles when a push finds it full and halves once a pop leaves it a
//! quarter occupied. It never holds more than [`MAX_CAPACITY`] (32768)
//! elements.
//!
//! [`StringStack`] is the variable-length variant. It stores its own copy of
//! every pushed `&str` and rejects strings longer than a per-element byte
//! limit (default [`MAX_ELEMENT_BYTE_SIZE`], 256).
//!
//! ## API
//!
//! The surface is deliberately small: `push`, `pop`, and read-only
//! inspection (`size`/`len`, `is_empty`, `is_full`, `capacity`,
//! `remaining`). There is no iteration, indexing, or search. Dropping a stack
//! drops every element still on it and then frees the buffer.
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `unsafe-raw-buffer` feature
//! flag:
//!
//! - **Default backend (safe)**:
//!   - Storage is `alloc::vec::Vec<T>`. Growth goes through
//!     `Vec::try_reserve_exact`, so allocation failure is reported instead of
//!     aborting.
//!   - The crate is `#![forbid(unsafe_code)]` (outside tests).
//!
//! - **`unsafe-raw-buffer` backend**:
//!   - Storage is a raw buffer from the global allocator, managed with
//!     `alloc`/`realloc`/`dealloc`. Grow and shrink are each a single
//!     `realloc`.
//!   - A small amount of internal `unsafe` is used to treat only the
//!     `[0..len)` prefix as initialized.
//!
//! In both backends the **public API is fully safe** and behaves identically.
//!
//! ## Features
//!
//! - `unsafe-raw-buffer`: selects the raw-allocation backend described above.
//! - `serde`: `Serialize` / `Deserialize` for [`Stack<T>`] and
//!   [`StringStack`], as a bottom-to-top sequence.
//! - `tracing`: emits `trace!` events on every buffer reallocation. It also
//!   emits a `debug!` event when a post-pop shrink fails and the larger
//!   buffer is kept. Without this feature the crate never logs.
//!
//! ## Errors
//!
//! Capacity and allocation failures never panic. They return an [`Error`]:
//!
//! - [`Error::Full`]: push at `MAX_CAPACITY`;
//! - [`Error::Empty`]: pop from an empty stack;
//! - [`Error::ElementTooLarge`]: `StringStack` push over the byte limit;
//! - [`Error::OutOfMemory`]: the buffer could not be allocated or grown.
//!   A push that fails this way leaves the stack unchanged. A failed shrink
//!   after a pop is not an error; the larger buffer is simply kept.
//!
//! ## Example
//!
//! ```rust
//! use growable_stack::{Error, Stack};
//!
//! let mut s: Stack<u32> = Stack::new();
//! for i in 0..20 {
//!     s.push(i).unwrap();
//! }
//! assert_eq!(s.size(), 20);
//! assert_eq!(s.capacity(), 32);
//! assert_eq!(s.pop(), Ok(19));
//!
//! let mut empty: Stack<u32> = Stack::new();
//! assert_eq!(empty.pop(), Err(Error::Empty));
//! ```

#![cfg_attr(not(feature = "unsafe-raw-buffer"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod capacity;
mod error;
#[cfg(feature = "serde")]
mod serde;
mod stack;
mod string_stack;
mod trace;

// Public exports (crate API surface)
pub use capacity::{INITIAL_CAPACITY, MAX_CAPACITY, MAX_ELEMENT_BYTE_SIZE};
pub use error::Error;
pub use stack::Stack;
pub use string_stack::StringStack;
