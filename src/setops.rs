//! Ordered-merge set operations over ascending, duplicate-free sequences.
//!
//! Every function here assumes its inputs are sorted ascending and yields a
//! sorted result. Nothing is checked at runtime.

use std::cmp::Ordering;

use itertools::{merge_join_by, EitherOrBoth};

use crate::types::{Diffset, Item, Itemset, Tid, Tidset};

/// Union of two itemsets.
pub fn itemset_union(itemset_l: &[Item], itemset_r: &[Item]) -> Itemset {
    merge_join_by(itemset_l, itemset_r, |l, r| l.cmp(r))
        .map(|either| match either {
            EitherOrBoth::Both(&x, _) | EitherOrBoth::Left(&x) | EitherOrBoth::Right(&x) => x,
        })
        .collect()
}

/// Transactions present in both tidsets.
pub fn tidset_intersection(tidset_l: &[Tid], tidset_r: &[Tid]) -> Tidset {
    merge_join_by(tidset_l, tidset_r, |l, r| l.cmp(r))
        .filter_map(|either| match either {
            EitherOrBoth::Both(&x, _) => Some(x),
            _ => None,
        })
        .collect()
}

/// Diffset of the join of `curr` with `other`: the tids in `other` that are
/// not in `curr`.
///
/// Argument order follows the node roles, not the usual `a \ b` reading:
/// `d(PXY) = d(PY) \ d(PX)` is spelled `diffset_difference(d(PX), d(PY))`.
pub fn diffset_difference(curr: &[Tid], other: &[Tid]) -> Diffset {
    merge_join_by(other, curr, |o, c| o.cmp(c))
        .filter_map(|either| match either {
            EitherOrBoth::Left(&x) => Some(x),
            _ => None,
        })
        .collect()
}

/// `true` if every element of `subset` appears in `superset`.
pub fn includes<T: Ord>(superset: &[T], subset: &[T]) -> bool {
    let mut sup = superset.iter();
    'outer: for x in subset {
        for y in sup.by_ref() {
            match y.cmp(x) {
                Ordering::Less => continue,
                Ordering::Equal => continue 'outer,
                Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}
