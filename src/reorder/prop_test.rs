//! Property tests for the reorder view state: every gesture is a
//! permutation, submissions are dense, keyboard swaps touch one pair.

#![cfg(test)]

use proptest::prelude::*;

use super::drop_target::{insertion_target, RowGeometry};
use super::order::{Direction, RowKey, RowOrder};

#[derive(Debug, Clone)]
enum Gesture {
    MoveBefore(usize, Option<usize>),
    Swap(usize, Direction),
}

fn gesture_strategy(len: usize) -> impl Strategy<Value = Gesture> {
    let dir = prop_oneof![Just(Direction::Up), Just(Direction::Down)];
    prop_oneof![
        (0..len, proptest::option::of(0..len)).prop_map(|(k, t)| Gesture::MoveBefore(k, t)),
        (0..len, dir).prop_map(|(k, d)| Gesture::Swap(k, d)),
    ]
}

fn scenario() -> impl Strategy<Value = (usize, Vec<Gesture>)> {
    (1usize..12).prop_flat_map(|len| (Just(len), prop::collection::vec(gesture_strategy(len), 0..24)))
}

fn order_of(len: usize) -> RowOrder {
    RowOrder::from_ids((0..len).map(|i| Some(i.to_string())))
}

fn apply(order: &mut RowOrder, g: &Gesture) -> bool {
    match *g {
        Gesture::MoveBefore(k, t) => order.move_before(RowKey(k), t.map(RowKey)),
        Gesture::Swap(k, d) => order.swap_adjacent(RowKey(k), d),
    }
}

proptest! {
    #[test]
    fn gestures_only_permute_and_positions_stay_dense((len, gestures) in scenario()) {
        let mut order = order_of(len);
        for g in &gestures {
            apply(&mut order, g);
        }

        let sub = order.submission();
        prop_assert_eq!(sub.order.len(), len);
        prop_assert!(sub.is_dense());

        let mut ids: Vec<usize> = sub
            .order
            .iter()
            .map(|e| e.id.as_deref().unwrap().parse().unwrap())
            .collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn swap_moves_exactly_one_adjacent_pair(len in 1usize..12, k in 0usize..12, up in any::<bool>()) {
        let k = k % len;
        let dir = if up { Direction::Up } else { Direction::Down };
        let mut order = order_of(len);
        let before: Vec<_> = order.keys().collect();

        let moved = order.swap_adjacent(RowKey(k), dir);
        let after: Vec<_> = order.keys().collect();

        let at_boundary = (up && k == 0) || (!up && k + 1 == len);
        prop_assert_eq!(moved, !at_boundary);

        let diffs: Vec<usize> = (0..len).filter(|&i| before[i] != after[i]).collect();
        if moved {
            prop_assert_eq!(diffs.len(), 2);
            prop_assert_eq!(diffs[1] - diffs[0], 1);
        } else {
            prop_assert!(diffs.is_empty());
        }
    }

    #[test]
    fn drop_lands_before_first_midpoint_below_pointer(
        heights in prop::collection::vec(10.0f64..80.0, 1..10),
        dragged in 0usize..10,
        pointer in -20.0f64..900.0,
    ) {
        let len = heights.len();
        let dragged = RowKey(dragged % len);

        let mut top = 0.0;
        let rows: Vec<RowGeometry> = heights
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let g = RowGeometry { key: RowKey(i), top, height: *h };
                top += h;
                g
            })
            .collect();

        let target = insertion_target(&rows, pointer, Some(dragged));
        let mut order = order_of(len);
        order.move_before(dragged, target);
        let keys: Vec<RowKey> = order.keys().collect();
        let idx = keys.iter().position(|k| *k == dragged).unwrap();

        match target {
            Some(t) => {
                prop_assert_eq!(keys[idx + 1], t);
                let t_geo = rows[t.0];
                prop_assert!(pointer < t_geo.midpoint());
                // No earlier non-dragged row had its midpoint below the pointer.
                for g in rows.iter().take_while(|g| g.key != t) {
                    prop_assert!(g.key == dragged || pointer >= g.midpoint());
                }
            }
            None => prop_assert_eq!(idx, len - 1),
        }
    }
}
