// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A copy-on-push stack of strings with a per-element byte limit.
//!
//! [`StringStack`] is the variable-length counterpart of [`Stack`]. `push`
//! borrows the caller's text and stores its own owned copy, so the caller's
//! string is never moved or modified. `pop` hands that copy back.
//! Elements longer than `MAX_BYTES` (UTF-8 bytes, not chars) are rejected
//! with [`Error::ElementTooLarge`].

// Crate imports
use crate::{capacity::MAX_ELEMENT_BYTE_SIZE, error::Error, stack::Stack};

// Alloc imports
use alloc::string::String;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A [`Stack<String>`] that copies text on push and limits element length.
///
/// `MAX_BYTES` defaults to [`MAX_ELEMENT_BYTE_SIZE`] (256). Growth, shrinking,
/// the `MAX_CAPACITY` ceiling, and the error rules are the same as for
/// [`Stack`].
///
/// # Examples
///
/// ```rust
/// use growable_stack::{Error, StringStack};
///
/// let mut s: StringStack = StringStack::new();
/// let name = String::from("hello");
/// s.push(&name).unwrap();
/// assert_eq!(s.pop().unwrap(), "hello");
/// assert_eq!(name, "hello"); // the caller's copy is untouched
///
/// let long = "x".repeat(257);
/// assert_eq!(s.push(&long), Err(Error::ElementTooLarge { len: 257, max: 256 }));
/// ```
pub struct StringStack<const MAX_BYTES: usize = MAX_ELEMENT_BYTE_SIZE> {
    inner: Stack<String>,
}

impl<const MAX_BYTES: usize> StringStack<MAX_BYTES> {
    /// Per-element byte limit enforced on push.
    pub const MAX_ELEMENT_BYTE_SIZE: usize = MAX_BYTES;

    /// Creates an empty stack, aborting if the buffer cannot be allocated.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Stack::new(),
        }
    }

    /// Creates an empty stack, or returns [`Error::OutOfMemory`].
    #[inline]
    pub fn try_new() -> Result<Self, Error> {
        Ok(Self {
            inner: Stack::try_new()?,
        })
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the stack holds `MAX_CAPACITY` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns `MAX_CAPACITY - len`, the number of pushes left before [`Error::Full`].
    #[inline]
    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    /// Pushes an owned copy of `item`.
    ///
    /// # Errors
    ///
    /// In order of precedence:
    /// - [`Error::Full`] if the stack is at `MAX_CAPACITY`;
    /// - [`Error::ElementTooLarge`] if `item.len() > MAX_BYTES`;
    /// - [`Error::OutOfMemory`] if the buffer could not grow.
    ///
    /// On any error the stack is unchanged.
    pub fn push(&mut self, item: &str) -> Result<(), Error> {
        self.check(item)?;
        self.inner.push(String::from(item))
    }

    /// Pushes `item` without copying, applying the same checks as [`push`](Self::push).
    pub fn push_owned(&mut self, item: String) -> Result<(), Error> {
        self.check(&item)?;
        self.inner.push(item)
    }

    /// Removes the top string and transfers it to the caller.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to pop.
    #[inline]
    pub fn pop(&mut self) -> Result<String, Error> {
        self.inner.pop()
    }

    fn check(&self, item: &str) -> Result<(), Error> {
        if self.inner.is_full() {
            return Err(Error::Full);
        }
        if item.len() > MAX_BYTES {
            return Err(Error::ElementTooLarge {
                len: item.len(),
                max: MAX_BYTES,
            });
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub(crate) fn as_stack(&self) -> &Stack<String> {
        &self.inner
    }
}

impl<const MAX_BYTES: usize> Default for StringStack<MAX_BYTES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_BYTES: usize> Clone for StringStack<MAX_BYTES> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<const MAX_BYTES: usize> PartialEq for StringStack<MAX_BYTES> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
impl<const MAX_BYTES: usize> Eq for StringStack<MAX_BYTES> {}
impl<const MAX_BYTES: usize> Hash for StringStack<MAX_BYTES> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}

impl<const MAX_BYTES: usize> fmt::Debug for StringStack<MAX_BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringStack")
            .field("max_element_bytes", &MAX_BYTES)
            .field("len", &self.inner.len())
            .field("capacity", &self.inner.capacity())
            .field("elements", &self.inner.as_slice())
            .finish()
    }
}
