// src/graph/edges.rs
//! Edge construction over grouped cities.
//!
//! Keeps the proximity predicate apart from grouping so a different rule
//! (real coordinates, say) can replace [`ForwardWindow`] without touching
//! the grouping or the traversal.

use std::collections::HashSet;

use super::grouping::StateCityIndex;

/// Decides which cities of one group are adjacent.
pub trait EdgeRule {
    /// Returns index pairs into `cities` that should be linked.
    ///
    /// Pairs are undirected. Order matters: it becomes neighbor insertion order.
    fn link(&self, cities: &[String]) -> Vec<(usize, usize)>;
}

/// Links each city to the next `width` cities of its group, clipped at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardWindow {
    width: usize,
}

impl ForwardWindow {
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for ForwardWindow {
    fn default() -> Self {
        Self::new(3)
    }
}

impl EdgeRule for ForwardWindow {
    fn link(&self, cities: &[String]) -> Vec<(usize, usize)> {
        let n = cities.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            let end = n.min(i.saturating_add(self.width).saturating_add(1));
            pairs.extend((i + 1..end).map(|j| (i, j)));
        }
        pairs
    }
}

/// Applies `rule` to every state group and returns the distinct undirected edges.
///
/// Edges come back in construction order; a pair already produced (in either
/// direction) is not repeated.
#[must_use]
pub fn build_edges<R: EdgeRule + ?Sized>(
    index: &StateCityIndex,
    rule: &R,
) -> Vec<(String, String)> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut edges = Vec::new();

    for (_, cities) in index.groups() {
        for (i, j) in rule.link(cities) {
            let (Some(a), Some(b)) = (cities.get(i), cities.get(j)) else {
                continue;
            };
            if a == b {
                continue;
            }
            let key = if a < b {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            };
            if seen.insert(key) {
                edges.push((a.clone(), b.clone()));
            }
        }
    }

    edges
}
