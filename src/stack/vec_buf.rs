// Invariants for the default `Vec<T>` backend:
// - `buf.len()` is the logical length; `buf[..len]` are the live elements.
// - `cap` is the logical capacity. `buf.capacity() >= cap` always holds, since
//   every resize reserves exactly `cap` slots up front.
// - `INITIAL_CAPACITY <= cap <= MAX_CAPACITY` and `buf.len() <= cap`.

mod clone;
mod new;
mod reallocate;
mod slot;
