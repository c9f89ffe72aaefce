// src/graph/locality.rs
//! The undirected city adjacency structure.

use std::collections::HashMap;

use crate::fold;

/// City → neighbors, insertion-ordered and symmetric.
///
/// Every city passed to [`LocalityGraph::with_cities`] has an entry even if
/// it has no neighbors. The graph is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct LocalityGraph {
    adjacency: HashMap<String, Vec<String>>,
    /// Cities in first-seen order, for deterministic iteration.
    order: Vec<String>,
}

impl LocalityGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with an empty neighbor list for each city.
    #[must_use]
    pub fn with_cities(cities: &[String]) -> Self {
        let mut graph = Self {
            adjacency: HashMap::with_capacity(cities.len()),
            order: Vec::with_capacity(cities.len()),
        };
        for city in cities {
            graph.ensure_city(city);
        }
        graph
    }

    fn ensure_city(&mut self, city: &str) -> &mut Vec<String> {
        if !self.adjacency.contains_key(city) {
            self.order.push(city.to_string());
        }
        self.adjacency.entry(city.to_string()).or_default()
    }

    /// Adds the undirected edge `a`–`b`. Returns false if it already existed.
    pub(crate) fn connect(&mut self, a: &str, b: &str) -> bool {
        let forward = push_unique(self.ensure_city(a), b);
        let backward = push_unique(self.ensure_city(b), a);
        forward || backward
    }

    /// Neighbors of `city` in insertion order. Unknown cities have none.
    #[must_use]
    pub fn neighbors(&self, city: &str) -> &[String] {
        self.adjacency.get(city).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, city: &str) -> bool {
        self.adjacency.contains_key(city)
    }

    /// Finds the stored spelling of `city`, trying an exact match first and
    /// then a case-insensitive one.
    #[must_use]
    pub fn resolve(&self, city: &str) -> Option<&str> {
        if let Some((name, _)) = self.adjacency.get_key_value(city) {
            return Some(name.as_str());
        }
        self.order
            .iter()
            .find(|name| fold::eq_ignore_case(name, city))
            .map(String::as_str)
    }

    /// Cities in first-seen order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn city_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, city: &str) -> bool {
    if list.iter().any(|c| c == city) {
        return false;
    }
    list.push(city.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_isolated_cities_have_entries() {
        let g = LocalityGraph::with_cities(&cities(&["A", "B"]));
        assert!(g.contains("A"));
        assert!(g.neighbors("A").is_empty());
        assert_eq!(g.city_count(), 2);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_connect_is_symmetric_and_idempotent() {
        let mut g = LocalityGraph::with_cities(&cities(&["A", "B", "C"]));
        assert!(g.connect("A", "B"));
        assert!(!g.connect("B", "A"));
        assert!(g.connect("A", "C"));
        assert_eq!(g.neighbors("A"), ["B", "C"]);
        assert_eq!(g.neighbors("B"), ["A"]);
        assert_eq!(g.neighbors("C"), ["A"]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_unknown_city_has_no_neighbors() {
        let g = LocalityGraph::new();
        assert!(g.neighbors("Nowhere").is_empty());
        assert!(!g.contains("Nowhere"));
        assert!(g.is_empty());
    }

    #[test]
    fn test_resolve_prefers_exact_spelling() {
        let g = LocalityGraph::with_cities(&cities(&["Pune", "Kochi"]));
        assert_eq!(g.resolve("Pune"), Some("Pune"));
        assert_eq!(g.resolve("KOCHI"), Some("Kochi"));
        assert_eq!(g.resolve("Goa"), None);
    }
}
