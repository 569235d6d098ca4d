// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Stack` type and its inherent API.
//!
//! `Stack<T>` is a LIFO container over one contiguous heap buffer. The buffer
//! doubles when a push finds it full and halves once a pop drops occupancy to
//! a quarter. It never grows past [`MAX_CAPACITY`] slots and never shrinks
//! below [`INITIAL_CAPACITY`].
//!
//! Each backend supplies a handful of primitives (`try_new`, `len`,
//! `as_slice`, `write_top`, `take_top`, `reallocate`). The capacity policy
//! lives here and drives both of them through [`Stack::resize`].

#[cfg(feature = "unsafe-raw-buffer")]
mod raw_buf;
#[cfg(not(feature = "unsafe-raw-buffer"))]
mod vec_buf;

// Crate imports
use crate::{
    capacity::{self, INITIAL_CAPACITY, MAX_CAPACITY},
    error::Error,
    trace,
};

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A growable LIFO stack with a hard ceiling of [`MAX_CAPACITY`] elements.
///
/// # Layout and invariants
///
/// A `Stack<T>` owns:
///
/// - a heap buffer of `capacity` slots. The backend is `Vec<T>` by default,
///   or a raw allocation with the `unsafe-raw-buffer` feature;
/// - a logical length `len` (the "top"), which is also the slot the next
///   push writes to.
///
/// At all times `0 <= len <= capacity <= MAX_CAPACITY` and
/// `capacity >= INITIAL_CAPACITY`. Slots `[0, len)` hold live elements; the
/// rest hold nothing.
///
/// # Ownership
///
/// [`push`](Stack::push) moves the element in and [`pop`](Stack::pop) moves
/// it back out. Elements still on the stack are dropped when the stack is
/// dropped, so there is no explicit destroy. If you want copy-on-push, clone
/// before pushing, or use [`StringStack`](crate::StringStack) for text.
///
/// # Growth and shrinking
///
/// - A push into a full buffer first reallocates to
///   `min(capacity * 2, MAX_CAPACITY)`. If that fails the push returns
///   [`Error::OutOfMemory`] and nothing changes.
/// - After a pop, if `len <= capacity / 4`, the buffer is halved (never below
///   `INITIAL_CAPACITY`). If that reallocation fails, the larger buffer is
///   kept and the pop still succeeds.
///
/// # Concurrency
///
/// There is no internal synchronization. Mutation needs `&mut self`, so
/// callers that share a stack between threads must wrap it in a lock such
/// as `Mutex<Stack<T>>`. `Stack<T>` is `Send`/`Sync` exactly when `T` is.
///
/// # Examples
///
/// ```rust
/// use growable_stack::{Error, Stack};
///
/// let mut s: Stack<&str> = Stack::new();
/// s.push("a").unwrap();
/// s.push("b").unwrap();
/// assert_eq!(s.pop(), Ok("b"));
/// assert_eq!(s.pop(), Ok("a"));
/// assert_eq!(s.pop(), Err(Error::Empty));
/// ```
#[cfg(not(feature = "unsafe-raw-buffer"))]
pub struct Stack<T> {
    pub(crate) buf: alloc::vec::Vec<T>,
    pub(crate) cap: usize,
}
#[cfg(feature = "unsafe-raw-buffer")]
pub struct Stack<T> {
    pub(crate) ptr: core::ptr::NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) len: usize,
    pub(crate) _owns: core::marker::PhantomData<T>,
}

impl<T> Stack<T> {
    /// The hard ceiling on the number of elements.
    pub const MAX_CAPACITY: usize = MAX_CAPACITY;

    /// The slot count of a freshly created stack.
    pub const INITIAL_CAPACITY: usize = INITIAL_CAPACITY;

    /// Creates an empty stack with [`INITIAL_CAPACITY`] slots.
    ///
    /// Like `alloc` collections, this aborts if the buffer cannot be
    /// allocated. Use [`try_new`](Stack::try_new) to get
    /// [`Error::OutOfMemory`] instead.
    #[inline]
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(s) => s,
            Err(_) => alloc::alloc::handle_alloc_error(initial_layout::<T>()),
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the stack holds [`MAX_CAPACITY`] elements.
    ///
    /// This compares against the hard ceiling, not the current allocation.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == MAX_CAPACITY
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `MAX_CAPACITY - len`, the number of pushes left before [`Error::Full`].
    #[inline]
    pub fn remaining(&self) -> usize {
        MAX_CAPACITY - self.len()
    }

    /// Pushes `item` on top, growing the buffer if it is full.
    ///
    /// # Errors
    ///
    /// - [`Error::Full`] if the stack already holds `MAX_CAPACITY` elements.
    /// - [`Error::OutOfMemory`] if growing failed. The stack is unchanged
    ///   and `item` is dropped.
    pub fn push(&mut self, item: T) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Full);
        }
        if self.len() == self.cap {
            self.resize(capacity::grow_target(self.cap))?;
        }
        self.write_top(item);
        Ok(())
    }

    /// Removes the top element and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if there is nothing to pop. A failed shrink afterwards
    /// is not an error.
    pub fn pop(&mut self) -> Result<T, Error> {
        let item = self.take_top().ok_or(Error::Empty)?;
        if let Some(target) = capacity::shrink_target(self.cap, self.len()) {
            if self.resize(target).is_err() {
                trace::shrink_skipped(self.cap, target, self.len());
            }
        }
        Ok(item)
    }

    // Every capacity change, in both directions, goes through here.
    fn resize(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len() && new_cap <= MAX_CAPACITY);
        let old_cap = self.cap;
        self.reallocate(new_cap)?;
        trace::resized(old_cap, new_cap, self.len());
        Ok(())
    }
}

fn initial_layout<T>() -> core::alloc::Layout {
    core::alloc::Layout::array::<T>(INITIAL_CAPACITY).unwrap_or(core::alloc::Layout::new::<T>())
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("len", &self.len())
            .field("capacity", &self.cap)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Stack<T> {}
impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Stack;
    use crate::{Error, INITIAL_CAPACITY, MAX_CAPACITY};
    use alloc::{format, rc::Rc, string::String};

    #[test]
    fn test_push_pop() {
        let mut s: Stack<u8> = Stack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.pop(), Err(Error::Empty));
    }

    #[test]
    fn test_new_stack_shape() {
        let s: Stack<i32> = Stack::try_new().unwrap();
        assert_eq!(s.size(), 0);
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), INITIAL_CAPACITY);
        assert!(s.is_empty());
        assert!(!s.is_full());
        assert_eq!(s.remaining(), MAX_CAPACITY);

        let d: Stack<i32> = Stack::default();
        assert_eq!(d.capacity(), Stack::<i32>::INITIAL_CAPACITY);
    }

    #[test]
    fn test_pop_from_fresh_stack_is_empty_error() {
        let mut s: Stack<String> = Stack::new();
        assert_eq!(s.pop(), Err(Error::Empty));
        assert_eq!(s.size(), 0);
        assert_eq!(s.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_lifo_order() {
        let mut s: Stack<char> = Stack::new();
        for c in ['a', 'b', 'c'] {
            s.push(c).unwrap();
        }
        assert_eq!(s.pop(), Ok('c'));
        assert_eq!(s.pop(), Ok('b'));
        assert_eq!(s.pop(), Ok('a'));
        assert!(s.is_empty());
    }

    #[test]
    fn test_growth_doubles_at_boundary() {
        let mut s: Stack<u32> = Stack::new();
        for i in 0..16 {
            s.push(i).unwrap();
        }
        assert_eq!(s.capacity(), 16);
        s.push(16).unwrap();
        assert_eq!(s.capacity(), 32);
        for i in 17..32 {
            s.push(i).unwrap();
        }
        assert_eq!(s.capacity(), 32);
        s.push(32).unwrap();
        assert_eq!(s.capacity(), 64);
        assert_eq!(s.size(), 33);
    }

    #[test]
    fn test_fill_to_ceiling_then_full() {
        let mut s: Stack<u16> = Stack::new();
        for i in 0..MAX_CAPACITY {
            s.push(i as u16).unwrap();
        }
        assert!(s.is_full());
        assert_eq!(s.size(), MAX_CAPACITY);
        assert_eq!(s.capacity(), MAX_CAPACITY);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.push(0), Err(Error::Full));
        assert_eq!(s.size(), MAX_CAPACITY);

        assert_eq!(s.pop(), Ok((MAX_CAPACITY - 1) as u16));
        assert!(!s.is_full());
        s.push(7).unwrap();
        assert!(s.is_full());
    }

    #[test]
    fn test_shrink_after_draining() {
        let mut s: Stack<u64> = Stack::new();
        for i in 0..64 {
            s.push(i).unwrap();
        }
        assert_eq!(s.capacity(), 64);

        // 64 -> 17 live: still above a quarter.
        for _ in 0..47 {
            s.pop().unwrap();
        }
        assert_eq!(s.capacity(), 64);

        // 16 live is a quarter of 64.
        assert_eq!(s.pop(), Ok(16));
        assert_eq!(s.capacity(), 32);
        assert_eq!(s.size(), 16);

        while s.pop().is_ok() {}
        assert_eq!(s.capacity(), INITIAL_CAPACITY);
        assert!(s.is_empty());
    }

    #[test]
    fn test_contents_survive_resizing() {
        let mut s: Stack<String> = Stack::new();
        for i in 0..100 {
            s.push(format!("item-{i}")).unwrap();
        }
        for i in (0..100).rev() {
            assert_eq!(s.pop().unwrap(), format!("item-{i}"));
            assert!(s.len() <= s.capacity());
        }
    }

    #[test]
    fn test_drop_releases_live_elements() {
        let marker = Rc::new(());
        {
            let mut s: Stack<Rc<()>> = Stack::new();
            for _ in 0..40 {
                s.push(Rc::clone(&marker)).unwrap();
            }
            let popped = s.pop().unwrap();
            assert_eq!(Rc::strong_count(&marker), 41);
            drop(popped);
            assert_eq!(Rc::strong_count(&marker), 40);
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut s: Stack<()> = Stack::new();
        for _ in 0..100 {
            s.push(()).unwrap();
        }
        assert_eq!(s.size(), 100);
        assert_eq!(s.capacity(), 128);
        for _ in 0..100 {
            assert_eq!(s.pop(), Ok(()));
        }
        assert_eq!(s.pop(), Err(Error::Empty));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a: Stack<String> = Stack::new();
        for i in 0..20 {
            a.push(format!("{i}")).unwrap();
        }
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.capacity(), a.capacity());

        b.push(String::from("extra")).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.size(), 20);
        assert_eq!(b.pop().unwrap(), "extra");
        assert_eq!(a.pop().unwrap(), "19");
    }

    #[test]
    fn test_eq_and_hash_follow_contents() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        fn hash_of(s: &Stack<u8>) -> u64 {
            let mut h = DefaultHasher::new();
            s.hash(&mut h);
            h.finish()
        }

        let mut a: Stack<u8> = Stack::new();
        let mut b: Stack<u8> = Stack::new();
        for i in 0..40 {
            a.push(i).unwrap();
        }
        // Same contents, different capacity.
        for i in 0..128 {
            b.push(i).unwrap();
        }
        for _ in 40..128 {
            b.pop().unwrap();
        }
        assert_eq!(a.capacity(), 64);
        assert_eq!(b.capacity(), 128);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_debug_shows_len_capacity_and_elements() {
        let mut s: Stack<i32> = Stack::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        let dbg = format!("{s:?}");
        assert_eq!(dbg, "Stack { len: 2, capacity: 16, elements: [1, 2] }");
    }

    #[test]
    fn test_send_sync_follow_element_type() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Stack<u32>>();
        assert_send_sync::<Stack<String>>();
    }
}
