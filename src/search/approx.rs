// src/search/approx.rs
//! Tolerance-based binary search over price-sorted records.

use crate::types::Priced;

/// Probes `sorted` along the usual binary-search path and returns the first
/// probed item whose price is strictly within `tolerance` of `target`.
///
/// This finds *a* match on the probe path, not the closest one; a nearer
/// price off the path is never seen. Returns `None` when the path runs out.
#[must_use]
pub fn approx_price_search<T: Priced>(sorted: &[T], target: f64, tolerance: f64) -> Option<&T> {
    // Half-open [low, high); `mid` rounds down like an inclusive (low + high) / 2.
    let mut low = 0usize;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - 1 - low) / 2;
        let item = sorted.get(mid)?;
        let price = item.price();
        if (price - target).abs() < tolerance {
            return Some(item);
        }
        if price < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    None
}
