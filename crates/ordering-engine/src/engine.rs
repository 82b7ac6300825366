//! # Engine Operations
//!
//! The three operations of the ordering engine, plus the canonical sibling
//! view they all share:
//!
//! * [`compute_insertion_key`] — midpoint interpolation between two bounds
//! * [`reorder`] — key computation for one item moved to a target index
//! * [`renumber`] — the O(n) recovery that restores precision headroom
//! * [`sorted`] — the `(sort, id)` display order every caller must use
//!
//! All operations are pure. `reorder` borrows the sibling list and returns
//! exactly one new key; persisting it (and only it) is the caller's job.

use crate::error::OrderingError;
use crate::key::SortKey;
use crate::orderable::Orderable;
use tracing::{debug, trace};

/// Computes a key for insertion between two neighboring bounds.
///
/// * both bounds present — the midpoint, strictly between them
/// * only `next` — `next - STEP` (insert at the front)
/// * only `prev` — `prev + STEP` (insert at the back)
/// * neither — [`SortKey::BASELINE`] (first item of an empty group)
///
/// # Errors
///
/// Returns [`OrderingError::PrecisionExhausted`] when the bounds are equal
/// or inverted, when the midpoint rounds onto a bound, or when a one-sided
/// step leaves the finite range. The result is verified to sort strictly
/// inside the bounds before it is returned; a duplicate or out-of-order key
/// is never produced.
pub fn compute_insertion_key(
    prev: Option<SortKey>,
    next: Option<SortKey>,
) -> Result<SortKey, OrderingError> {
    let exhausted = || OrderingError::PrecisionExhausted { prev, next };

    let key = match (prev, next) {
        (None, None) => SortKey::BASELINE,
        (Some(p), None) => {
            let key = SortKey::raw(p.value() + SortKey::STEP);
            // Beyond 2^53 the step can round away; beyond MAX it overflows.
            if !key.value().is_finite() || key <= p {
                return Err(exhausted());
            }
            key
        }
        (None, Some(n)) => {
            let key = SortKey::raw(n.value() - SortKey::STEP);
            if !key.value().is_finite() || key >= n {
                return Err(exhausted());
            }
            key
        }
        (Some(p), Some(n)) => {
            if p >= n {
                return Err(exhausted());
            }
            // Halving each term first keeps the sum finite even for bounds
            // near f64::MAX. The strict betweenness check below is what
            // actually guarantees correctness of the rounding.
            let mid = SortKey::raw(p.value() / 2.0 + n.value() / 2.0);
            if mid <= p || mid >= n {
                return Err(exhausted());
            }
            mid
        }
    };

    trace!(?prev, ?next, %key, "computed insertion key");
    Ok(key)
}

/// Computes the new key for `moved` relocated to `new_index`.
///
/// The sibling list is materialized in `(sort, id)` order, the moved item is
/// removed, and `new_index` is interpreted against the remaining list: the
/// item ends up before the sibling currently at that index. The two
/// positional neighbors of the insertion point become the bounds for
/// [`compute_insertion_key`].
///
/// The input is not mutated and no sibling other than `moved` is affected;
/// the caller persists the single returned key.
///
/// # Errors
///
/// * [`OrderingError::ItemNotFound`] — `moved` is absent from `items`
/// * [`OrderingError::InvalidPosition`] — `new_index` exceeds the list
///   length after removal
/// * [`OrderingError::PrecisionExhausted`] — no representable key exists at
///   the insertion point; recover with [`renumber`] and retry once
pub fn reorder<T: Orderable>(
    items: &[T],
    moved: &T::Id,
    new_index: usize,
) -> Result<SortKey, OrderingError> {
    let mut ordered = sorted(items);

    let current = ordered
        .iter()
        .position(|item| item.id() == *moved)
        .ok_or_else(|| OrderingError::ItemNotFound(moved.to_string()))?;
    ordered.remove(current);

    if new_index > ordered.len() {
        return Err(OrderingError::InvalidPosition {
            index: new_index,
            len: ordered.len(),
        });
    }

    let prev = new_index
        .checked_sub(1)
        .map(|index| ordered[index].sort_key());
    let next = ordered.get(new_index).map(|item| item.sort_key());

    trace!(
        moved = %moved,
        new_index,
        from = current,
        ?prev,
        ?next,
        "reordering within group"
    );
    compute_insertion_key(prev, next)
}

/// Assigns fresh, evenly spaced keys to every item, in the given order.
///
/// The input slice is taken as the desired display order; the first item
/// receives `RENUMBER_STEP`, the second `2 * RENUMBER_STEP`, and so on.
/// This is the designated recovery for [`OrderingError::PrecisionExhausted`]
/// — an explicit O(n) rewrite of the whole group, invoked rarely rather
/// than on every move.
pub fn renumber<T: Orderable>(items: &[T]) -> Vec<(T::Id, SortKey)> {
    debug!(count = items.len(), "renumbering sibling group");
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let key = SortKey::raw((index as f64 + 1.0) * SortKey::RENUMBER_STEP);
            (item.id(), key)
        })
        .collect()
}

/// Materializes the canonical display order: ascending `(sort, id)`.
///
/// The id tie-break makes the order reproducible even when two siblings
/// share a key.
pub fn sorted<T: Orderable>(items: &[T]) -> Vec<&T> {
    let mut view: Vec<&T> = items.iter().collect();
    view.sort_by(|a, b| display_cmp(*a, *b));
    view
}

/// Sorts a sibling list in place into canonical display order.
pub fn sort<T: Orderable>(items: &mut [T]) {
    items.sort_by(|a, b| display_cmp(a, b));
}

fn display_cmp<T: Orderable>(a: &T, b: &T) -> std::cmp::Ordering {
    a.sort_key()
        .cmp(&b.sort_key())
        .then_with(|| a.id().cmp(&b.id()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Row {
        id: u32,
        sort: SortKey,
    }

    impl Row {
        fn new(id: u32, sort: f64) -> Self {
            Self {
                id,
                sort: SortKey::new(sort).unwrap(),
            }
        }
    }

    impl Orderable for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn sort_key(&self) -> SortKey {
            self.sort
        }
    }

    fn key(value: f64) -> SortKey {
        SortKey::new(value).unwrap()
    }

    #[test]
    fn midpoint_is_strictly_between_bounds() {
        let result = compute_insertion_key(Some(key(1.0)), Some(key(2.0))).unwrap();
        assert!(key(1.0) < result && result < key(2.0));
        assert_eq!(result, key(1.5));
    }

    #[test]
    fn front_insertion_is_below_next() {
        let result = compute_insertion_key(None, Some(key(1.0))).unwrap();
        assert!(result < key(1.0));
        assert_eq!(result, key(0.0));
    }

    #[test]
    fn back_insertion_is_above_prev() {
        let result = compute_insertion_key(Some(key(3.0)), None).unwrap();
        assert!(result > key(3.0));
        assert_eq!(result, key(4.0));
    }

    #[test]
    fn empty_group_gets_the_baseline() {
        let result = compute_insertion_key(None, None).unwrap();
        assert_eq!(result, SortKey::BASELINE);
    }

    #[test]
    fn equal_bounds_exhaust_precision() {
        let result = compute_insertion_key(Some(key(2.0)), Some(key(2.0)));
        assert!(matches!(
            result,
            Err(OrderingError::PrecisionExhausted { .. })
        ));
    }

    #[test]
    fn inverted_bounds_exhaust_precision() {
        let result = compute_insertion_key(Some(key(2.0)), Some(key(1.0)));
        assert!(matches!(
            result,
            Err(OrderingError::PrecisionExhausted { .. })
        ));
    }

    #[test]
    fn ulp_adjacent_bounds_exhaust_precision() {
        let lower = 1.0_f64;
        let upper = f64::from_bits(lower.to_bits() + 1);
        let result = compute_insertion_key(Some(key(lower)), Some(key(upper)));
        assert!(matches!(
            result,
            Err(OrderingError::PrecisionExhausted { .. })
        ));
    }

    #[test]
    fn back_insertion_past_integer_precision_exhausts() {
        // Above 2^53 adding 1.0 rounds back onto the bound.
        let result = compute_insertion_key(Some(key(9_007_199_254_740_992.0)), None);
        assert!(matches!(
            result,
            Err(OrderingError::PrecisionExhausted { .. })
        ));
    }

    #[test]
    fn repeated_bisection_eventually_exhausts() {
        let mut lower = key(1.0);
        let upper = key(2.0);
        for _ in 0..200 {
            match compute_insertion_key(Some(lower), Some(upper)) {
                Ok(mid) => {
                    assert!(lower < mid && mid < upper);
                    lower = mid;
                }
                Err(OrderingError::PrecisionExhausted { .. }) => return,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        panic!("bisection never exhausted precision");
    }

    #[test]
    fn move_last_item_to_front() {
        // Siblings [1, 2, 3] as A, B, C; moving C to index 0 lands below A.
        let rows = vec![Row::new(1, 1.0), Row::new(2, 2.0), Row::new(3, 3.0)];
        let new_key = reorder(&rows, &3, 0).unwrap();
        assert!(new_key < key(1.0));

        let mut rows = rows;
        rows[2].sort = new_key;
        let order: Vec<u32> = sorted(&rows).iter().map(|r| r.id()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn move_first_item_to_back() {
        // Siblings [1, 2]; moving A past B lands above B's key.
        let rows = vec![Row::new(1, 1.0), Row::new(2, 2.0)];
        let new_key = reorder(&rows, &1, 1).unwrap();
        assert!(new_key > key(2.0));
    }

    #[test]
    fn move_to_middle_uses_both_neighbors() {
        let rows = vec![Row::new(1, 1.0), Row::new(2, 2.0), Row::new(3, 3.0)];
        let new_key = reorder(&rows, &1, 1).unwrap();
        assert!(key(2.0) < new_key && new_key < key(3.0));
    }

    #[test]
    fn move_to_current_position_preserves_neighbor_order() {
        let rows = vec![Row::new(1, 1.0), Row::new(2, 2.0), Row::new(3, 3.0)];
        // B removed, reinserted at index 1: neighbors are still A and C.
        let new_key = reorder(&rows, &2, 1).unwrap();
        assert!(key(1.0) < new_key && new_key < key(3.0));
    }

    #[test]
    fn reorder_does_not_touch_other_rows() {
        let rows = vec![Row::new(1, 1.0), Row::new(2, 2.0), Row::new(3, 3.0)];
        let before: Vec<SortKey> = rows.iter().map(|r| r.sort).collect();
        reorder(&rows, &3, 0).unwrap();
        let after: Vec<SortKey> = rows.iter().map(|r| r.sort).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_item_is_rejected() {
        let rows = vec![Row::new(1, 1.0)];
        let result = reorder(&rows, &99, 0);
        assert_eq!(result, Err(OrderingError::ItemNotFound("99".to_string())));
    }

    #[test]
    fn empty_group_is_item_not_found() {
        let rows: Vec<Row> = Vec::new();
        let result = reorder(&rows, &1, 0);
        assert_eq!(result, Err(OrderingError::ItemNotFound("1".to_string())));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let rows = vec![Row::new(1, 1.0), Row::new(2, 2.0)];
        // After removing the moved row one sibling remains, so 2 is out.
        let result = reorder(&rows, &1, 2);
        assert_eq!(
            result,
            Err(OrderingError::InvalidPosition { index: 2, len: 1 })
        );
    }

    #[test]
    fn last_valid_index_is_accepted() {
        let rows = vec![Row::new(1, 1.0), Row::new(2, 2.0)];
        assert!(reorder(&rows, &1, 1).is_ok());
    }

    #[test]
    fn tied_keys_order_deterministically_by_id() {
        let rows = vec![Row::new(3, 1.0), Row::new(1, 1.0), Row::new(2, 1.0)];
        let order: Vec<u32> = sorted(&rows).iter().map(|r| r.id()).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn renumber_restores_even_spacing() {
        let rows = vec![
            Row::new(1, 1.0),
            Row::new(2, 1.0000000001),
            Row::new(3, 1.0000000002),
        ];
        let fresh = renumber(&rows);
        assert_eq!(fresh.len(), 3);
        for (index, (id, new_key)) in fresh.iter().enumerate() {
            assert_eq!(*id, rows[index].id);
            let expected = (index as f64 + 1.0) * SortKey::RENUMBER_STEP;
            assert_eq!(*new_key, key(expected));
        }
    }

    #[test]
    fn renumber_preserves_the_given_order() {
        let rows = vec![Row::new(7, 5.0), Row::new(2, 3.0), Row::new(9, 4.0)];
        let ids: Vec<u32> = renumber(&rows).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![7, 2, 9]);
    }
}
