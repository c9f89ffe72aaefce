// src/graph/traversal.rs
//! Breadth-first expansion over the locality graph.

use std::collections::{HashSet, VecDeque};

use super::locality::LocalityGraph;

/// Every city reachable from `start`, in BFS visitation order, excluding `start`.
///
/// Neighbors are expanded in insertion order, so the result is deterministic
/// for a given dataset. It is not ordered by real distance. An unknown
/// `start` yields an empty list.
#[must_use]
pub fn nearby_cities(graph: &LocalityGraph, start: &str) -> Vec<String> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(city) = queue.pop_front() {
        for neighbor in graph.neighbors(city) {
            if visited.insert(neighbor.as_str()) {
                result.push(neighbor.clone());
                queue.push_back(neighbor.as_str());
            }
        }
    }

    result
}
