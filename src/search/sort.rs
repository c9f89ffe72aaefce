// src/search/sort.rs
//! Top-down merge sort by price.

use crate::types::Priced;

/// Sorts `items` ascending by price, in place.
///
/// Stable: on equal prices the merge takes from the left run first, so
/// ties keep their input order.
pub fn merge_sort<T: Priced + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let mid = items.len() / 2;
    let mut left = items[..mid].to_vec();
    let mut right = items[mid..].to_vec();

    merge_sort(&mut left);
    merge_sort(&mut right);
    merge(&left, &right, items);
}

fn merge<T: Priced + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    let mut left_iter = left.iter().peekable();
    let mut right_iter = right.iter().peekable();

    for slot in out.iter_mut() {
        let take_left = match (left_iter.peek(), right_iter.peek()) {
            (Some(l), Some(r)) => l.price() <= r.price(),
            (Some(_), None) => true,
            (None, _) => false,
        };
        let next = if take_left { left_iter.next() } else { right_iter.next() };
        if let Some(item) = next {
            *slot = item.clone();
        }
    }
}
