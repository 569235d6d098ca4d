// Invariants for the `unsafe-raw-buffer` backend:
// - `INITIAL_CAPACITY <= cap <= MAX_CAPACITY` and `0 <= len <= cap`.
// - For non-zero-sized `T`, `ptr` was returned by the global allocator for
//   `Layout::array::<T>(cap)` and is owned exclusively by this stack.
// - For zero-sized `T`, `ptr` is dangling and nothing is ever allocated.
// - `ptr[..len]` are initialized `T` values; `ptr[len..cap]` are logically
//   uninitialized and must never be read as `T`.
// - All public methods maintain these invariants.

mod alloc_buf;
mod clone;
mod drop;
mod new;
mod reallocate;
mod slot;

// Crate imports
use crate::stack::Stack;

// SAFETY: `Stack<T>` uniquely owns its buffer and the `T`s in it, exactly like
// `Vec<T>`; sending it sends those `T`s.
unsafe impl<T: Send> Send for Stack<T> {}
// SAFETY: `&Stack<T>` only hands out `&[T]` views of the live prefix.
unsafe impl<T: Sync> Sync for Stack<T> {}
