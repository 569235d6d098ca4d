//! Property tests for `Stack` push/pop accounting, against a `Vec` model.
//!
//! Checks that:
//! - `size()` always equals successful pushes minus successful pops
//! - `pop()` right after `push(x)` returns `x`
//! - `is_empty`/`is_full` agree with `size()`
//! - capacity stays a power of two in `INITIAL_CAPACITY..=MAX_CAPACITY` and
//!   never drops below `size()`

use growable_stack::{Error, INITIAL_CAPACITY, MAX_CAPACITY, Stack, StringStack};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategy: random operation sequences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    Pop,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
    ]
}

fn assert_shape<T>(s: &Stack<T>) {
    let cap = s.capacity();
    assert!(cap.is_power_of_two(), "capacity {cap} not a power of two");
    assert!((INITIAL_CAPACITY..=MAX_CAPACITY).contains(&cap));
    assert!(s.size() <= cap);
    assert_eq!(s.is_empty(), s.size() == 0);
    assert_eq!(s.is_full(), s.size() == MAX_CAPACITY);
    assert_eq!(s.remaining(), MAX_CAPACITY - s.size());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn size_tracks_successful_ops(ops in proptest::collection::vec(arb_op(), 0..600)) {
        let mut s: Stack<u32> = Stack::new();
        let mut model: Vec<u32> = Vec::new();
        let (mut pushes, mut pops) = (0usize, 0usize);

        for op in ops {
            match op {
                Op::Push(x) => {
                    prop_assert_eq!(s.push(x), Ok(()));
                    model.push(x);
                    pushes += 1;
                }
                Op::Pop => match model.pop() {
                    Some(expected) => {
                        prop_assert_eq!(s.pop(), Ok(expected));
                        pops += 1;
                    }
                    None => {
                        prop_assert_eq!(s.pop(), Err(Error::Empty));
                    }
                },
            }
            prop_assert_eq!(s.size(), pushes - pops);
            assert_shape(&s);
        }
    }

    #[test]
    fn pop_after_push_returns_same_value(
        prefix in proptest::collection::vec(any::<i64>(), 0..200),
        x in any::<i64>(),
    ) {
        let mut s: Stack<i64> = Stack::new();
        for v in &prefix {
            s.push(*v).unwrap();
        }
        let before = s.size();
        s.push(x).unwrap();
        prop_assert_eq!(s.pop(), Ok(x));
        prop_assert_eq!(s.size(), before);
    }

    #[test]
    fn pops_come_back_in_reverse(items in proptest::collection::vec(any::<u16>(), 0..300)) {
        let mut s: Stack<u16> = Stack::new();
        for v in &items {
            s.push(*v).unwrap();
        }
        let mut popped = Vec::with_capacity(items.len());
        while let Ok(v) = s.pop() {
            popped.push(v);
            assert_shape(&s);
        }
        popped.reverse();
        prop_assert_eq!(popped, items);
        prop_assert_eq!(s.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn oversized_strings_never_change_size(
        ok in proptest::collection::vec("[a-z]{0,8}", 0..50),
        extra in 1usize..64,
    ) {
        let mut s: StringStack<8> = StringStack::new();
        for v in &ok {
            s.push(v).unwrap();
        }
        let before = s.size();
        let long = "z".repeat(8 + extra);
        prop_assert_eq!(
            s.push(&long),
            Err(Error::ElementTooLarge { len: 8 + extra, max: 8 })
        );
        prop_assert_eq!(s.size(), before);
    }
}

#[test]
fn growth_stops_at_ceiling() {
    let mut s: Stack<u8> = Stack::new();
    let mut last_cap = s.capacity();
    for _ in 0..MAX_CAPACITY {
        s.push(0).unwrap();
        let cap = s.capacity();
        assert!(cap == last_cap || cap == last_cap * 2);
        last_cap = cap;
    }
    assert_eq!(s.capacity(), MAX_CAPACITY);
    assert_eq!(s.push(1), Err(Error::Full));
    assert_eq!(s.capacity(), MAX_CAPACITY);
    assert_shape(&s);
}
