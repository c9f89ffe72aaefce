// src/search/nearby.rs
//! Graph-aware search: properties of a type, near a price, around a city.

use std::collections::HashSet;

use crate::fold::eq_ignore_case;
use crate::graph::{nearby_cities, LocalityGraph};
use crate::types::PropertyRecord;

/// Parameters of a nearby search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub state: String,
    /// Anchor city. Blank or unknown cities fall back to the whole state.
    pub city: Option<String>,
    pub kind: String,
    pub target_price: f64,
    /// Accepted absolute price distance. `None` means "use the configured ratio".
    pub margin: Option<f64>,
}

impl NearbyQuery {
    #[must_use]
    pub fn new(state: &str, kind: &str, target_price: f64) -> Self {
        Self {
            state: state.to_string(),
            city: None,
            kind: kind.to_string(),
            target_price,
            margin: None,
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }
}

/// Records whose city is a candidate, whose type matches and whose price is
/// within `margin` of the target (inclusive). Input order is preserved.
///
/// Candidates are the anchor city plus everything BFS reaches from it when
/// the anchor is known to the graph; otherwise every city that has a record
/// in the requested state.
#[must_use]
pub fn search_nearby<'a>(
    records: &'a [PropertyRecord],
    graph: &LocalityGraph,
    query: &NearbyQuery,
    margin: f64,
) -> Vec<&'a PropertyRecord> {
    let candidates = candidate_cities(records, graph, query);

    records
        .iter()
        .filter(|r| candidates.contains(r.city.as_str()))
        .filter(|r| eq_ignore_case(&r.kind, &query.kind))
        .filter(|r| (r.price - query.target_price).abs() <= margin)
        .collect()
}

fn candidate_cities(
    records: &[PropertyRecord],
    graph: &LocalityGraph,
    query: &NearbyQuery,
) -> HashSet<String> {
    let anchor = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .and_then(|c| graph.resolve(c));

    if let Some(city) = anchor {
        let mut set: HashSet<String> = nearby_cities(graph, city).into_iter().collect();
        set.insert(city.to_string());
        return set;
    }

    records
        .iter()
        .filter(|r| eq_ignore_case(&r.state, &query.state))
        .map(|r| r.city.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphEngine;
    use crate::search::tests_support::listing;

    fn fixture() -> Vec<PropertyRecord> {
        vec![
            listing(1, "S", "A", "house", 100.0),
            listing(2, "S", "B", "house", 300.0),
            listing(3, "S", "C", "house", 500.0),
            listing(4, "S", "D", "house", 700.0),
        ]
    }

    #[test]
    fn test_worked_example() {
        let records = fixture();
        let graph = GraphEngine::build(&records, 3);
        let query = NearbyQuery::new("S", "house", 300.0).with_city("A").with_margin(50.0);
        let hits = search_nearby(&records, &graph, &query, 50.0);
        let ids: Vec<u64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_type_and_state_are_case_insensitive() {
        let records = fixture();
        let graph = GraphEngine::build(&records, 3);
        let query = NearbyQuery::new("s", "HOUSE", 500.0);
        let hits = search_nearby(&records, &graph, &query, 200.0);
        let ids: Vec<u64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_unknown_city_falls_back_to_state() {
        let mut records = fixture();
        records.push(listing(5, "T", "E", "house", 300.0));
        let graph = GraphEngine::build(&records, 3);
        let query = NearbyQuery::new("T", "house", 300.0).with_city("Atlantis");
        let hits = search_nearby(&records, &graph, &query, 0.0);
        let ids: Vec<u64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5]);
    }

    #[test]
    fn test_anchor_city_ignores_state_argument() {
        let mut records = fixture();
        records.push(listing(5, "T", "E", "house", 300.0));
        let graph = GraphEngine::build(&records, 3);
        // Known anchor: candidates come from the graph, not from `state`.
        let query = NearbyQuery::new("T", "house", 300.0).with_city("b");
        let hits = search_nearby(&records, &graph, &query, 0.0);
        let ids: Vec<u64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_margin_is_inclusive() {
        let records = fixture();
        let graph = GraphEngine::build(&records, 3);
        let query = NearbyQuery::new("S", "house", 400.0).with_city("A");
        let ids: Vec<u64> = search_nearby(&records, &graph, &query, 100.0)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_wrong_type_matches_nothing() {
        let records = fixture();
        let graph = GraphEngine::build(&records, 3);
        let query = NearbyQuery::new("S", "Commercial", 300.0).with_city("A");
        assert!(search_nearby(&records, &graph, &query, 1e9).is_empty());
    }
}
