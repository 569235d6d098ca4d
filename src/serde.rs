// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Stack`](crate::Stack) and [`StringStack`](crate::StringStack).
//!
//! - **Serialize**: as a sequence of the live elements, bottom to top.
//! - **Deserialize**: from any sequence, pushing each element in order, so
//!   the last element ends up on top. More than
//!   [`MAX_CAPACITY`](crate::MAX_CAPACITY) elements is an error, and so is
//!   any string longer than a `StringStack`'s byte limit.

// Crate imports
use crate::{capacity::MAX_CAPACITY, error::Error, stack::Stack, string_stack::StringStack};

// Alloc imports
use alloc::string::String;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

fn push_error<E: de::Error>(e: Error) -> E {
    match e {
        Error::Full => E::custom(format_args!("too many elements (capacity {MAX_CAPACITY})")),
        other => E::custom(other),
    }
}

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct StackVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sequence with at most {MAX_CAPACITY} elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Stack::<T>::try_new().map_err(push_error::<A::Error>)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(push_error::<A::Error>)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor::<T>(PhantomData))
    }
}

impl<const MAX_BYTES: usize> Serialize for StringStack<MAX_BYTES> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.as_stack().serialize(s)
    }
}

struct StringStackVisitor<const MAX_BYTES: usize>;

impl<'de, const MAX_BYTES: usize> de::Visitor<'de> for StringStackVisitor<MAX_BYTES> {
    type Value = StringStack<MAX_BYTES>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sequence of at most {MAX_CAPACITY} strings of at most {MAX_BYTES} bytes")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = StringStack::<MAX_BYTES>::try_new().map_err(push_error::<A::Error>)?;
        while let Some(elem) = a.next_element::<String>()? {
            out.push_owned(elem).map_err(push_error::<A::Error>)?;
        }
        Ok(out)
    }
}

impl<'de, const MAX_BYTES: usize> Deserialize<'de> for StringStack<MAX_BYTES> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StringStackVisitor::<MAX_BYTES>)
    }
}
