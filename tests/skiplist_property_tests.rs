use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use spanskip::SkipList;

/// Отсортированный вектор как эталон: дубликаты разрешены, удаляется
/// первое вхождение.
fn model_put(
    model: &mut Vec<i32>,
    value: i32,
) {
    let pos = model.partition_point(|x| *x < value);
    model.insert(pos, value);
}

fn model_remove(
    model: &mut Vec<i32>,
    value: i32,
) -> Option<i32> {
    let pos = model.partition_point(|x| *x < value);
    if model.get(pos) == Some(&value) {
        Some(model.remove(pos))
    } else {
        None
    }
}

proptest! {
    #[test]
    fn prop_behaves_like_sorted_vec(
        seed in any::<u64>(),
        ops in prop::collection::vec((0u8..4, -50i32..50), 0..300),
    ) {
        let mut sl = SkipList::with_rng(StdRng::seed_from_u64(seed));
        let mut model = Vec::new();
        let mut puts = 0usize;
        let mut removed = 0usize;

        for (op, value) in ops {
            match op {
                0 | 1 => {
                    let rank = sl.put(value);
                    model_put(&mut model, value);
                    puts += 1;
                    prop_assert_eq!(rank, model.partition_point(|x| *x < value) + 1);
                }
                2 => {
                    let r1 = sl.remove(&value);
                    let r2 = model_remove(&mut model, value);
                    if r1.is_some() {
                        removed += 1;
                    }
                    prop_assert_eq!(r1, r2);
                }
                3 => {
                    let lower = sl.get(&value).map(|n| *n.value());
                    let expected = model.get(model.partition_point(|x| *x < value)).copied();
                    prop_assert_eq!(lower, expected);
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(sl.len(), puts - removed);
            prop_assert_eq!(sl.validate_invariants(), Ok(()));
        }

        let forward: Vec<_> = sl.iter().copied().collect();
        prop_assert_eq!(&forward, &model);

        let mut backward: Vec<_> = sl.iter_rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&backward, &model);

        prop_assert_eq!(sl.last().is_none(), sl.is_empty());
    }
}

proptest! {
    #[test]
    fn prop_rank_matches_position(
        seed in any::<u64>(),
        values in prop::collection::vec(-1000i32..1000, 1..200),
    ) {
        let mut sl = SkipList::with_rng(StdRng::seed_from_u64(seed));
        for v in &values {
            sl.put(*v);
        }

        let mut sorted = values.clone();
        sorted.sort();

        for (pos, v) in sorted.iter().enumerate() {
            prop_assert_eq!(sl.get_by_rank(pos + 1).map(|n| *n.value()), Some(*v));
            let first = sorted.partition_point(|x| x < v) + 1;
            prop_assert_eq!(sl.rank(v), Some(first));
        }

        prop_assert!(sl.level() <= sl.max_level());
    }
}

proptest! {
    #[test]
    fn prop_range_by_rank_is_slice(
        seed in any::<u64>(),
        values in prop::collection::vec(0i32..100, 0..100),
        start in 1usize..120,
        len in 0usize..40,
    ) {
        let mut sl = SkipList::with_rng(StdRng::seed_from_u64(seed));
        for v in &values {
            sl.put(*v);
        }

        let mut sorted = values.clone();
        sorted.sort();

        let end = start + len;
        let got: Vec<_> = sl.range_by_rank(start, end).copied().collect();
        let expected: Vec<_> = sorted
            .iter()
            .skip(start - 1)
            .take(end - start + 1)
            .copied()
            .collect();

        prop_assert_eq!(got, expected);
    }
}
