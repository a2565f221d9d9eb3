//! Property-based tests for `List`'s length, duplication, and join
//! invariants against a `VecDeque` reference model.

use std::collections::VecDeque;

use proptest::prelude::*;
use zumic::List;

proptest! {
    #[test]
    fn prop_prepend_append_matches_vecdeque(
        ops in prop::collection::vec((0u8..2, 0i32..1000), 0..300)
    ) {
        let mut l: List<i32> = List::new();
        let mut reference: VecDeque<i32> = VecDeque::new();

        for (op, value) in ops {
            if op == 0 {
                l.prepend(value);
                reference.push_front(value);
            } else {
                l.append(value);
                reference.push_back(value);
            }
        }

        prop_assert_eq!(l.len(), reference.len());

        let mut iter = l.iter(zumic::database::list::Direction::HeadToTail);
        let mut collected = Vec::new();
        while let Some(id) = iter.next(&l) {
            collected.push(*l.get(id).unwrap());
        }
        let reference: Vec<i32> = reference.into_iter().collect();
        prop_assert_eq!(collected, reference);
    }

    #[test]
    fn prop_duplicate_without_dup_preserves_order_and_length(
        values in prop::collection::vec(0i32..1000, 0..200)
    ) {
        let mut l: List<i32> = List::new();
        for v in &values {
            l.append(*v);
        }

        let copy = l.duplicate().unwrap();
        prop_assert_eq!(copy.len(), l.len());

        let mut iter = copy.iter(zumic::database::list::Direction::HeadToTail);
        let mut collected = Vec::new();
        while let Some(id) = iter.next(&copy) {
            collected.push(*copy.get(id).unwrap());
        }
        prop_assert_eq!(collected, values);
    }

    #[test]
    fn prop_join_sums_lengths_and_empties_other(
        a_values in prop::collection::vec(0i32..1000, 0..150),
        b_values in prop::collection::vec(0i32..1000, 0..150),
    ) {
        let mut a: List<i32> = List::new();
        let mut b: List<i32> = List::new();
        for v in &a_values {
            a.append(*v);
        }
        for v in &b_values {
            b.append(*v);
        }

        let total = a_values.len() + b_values.len();
        a.join(&mut b);

        prop_assert_eq!(a.len(), total);
        prop_assert!(b.is_empty());

        let mut iter = a.iter(zumic::database::list::Direction::HeadToTail);
        let mut collected = Vec::new();
        while let Some(id) = iter.next(&a) {
            collected.push(*a.get(id).unwrap());
        }
        let expected: Vec<i32> = a_values.into_iter().chain(b_values).collect();
        prop_assert_eq!(collected, expected);
    }
}
