// src/graph/grouping.rs
//! State → cities grouping used only while building the graph.

use std::collections::{HashMap, HashSet};

use crate::types::PropertyRecord;

/// Cities of each state, in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct StateCityIndex {
    /// State names in first-seen order.
    states: Vec<String>,
    cities_by_state: HashMap<String, Vec<String>>,
    /// Every distinct city in first-seen order, across all states.
    all_cities: Vec<String>,
    seen: HashSet<String>,
}

impl StateCityIndex {
    #[must_use]
    pub fn from_records(records: &[PropertyRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.observe(&record.state, &record.city);
        }
        index
    }

    fn observe(&mut self, state: &str, city: &str) {
        if self.seen.insert(city.to_string()) {
            self.all_cities.push(city.to_string());
        }

        if !self.cities_by_state.contains_key(state) {
            self.states.push(state.to_string());
        }
        let cities = self.cities_by_state.entry(state.to_string()).or_default();
        if !cities.iter().any(|c| c == city) {
            cities.push(city.to_string());
        }
    }

    /// Cities first seen in `state`, or an empty slice.
    #[must_use]
    pub fn cities_in(&self, state: &str) -> &[String] {
        self.cities_by_state.get(state).map_or(&[][..], Vec::as_slice)
    }

    /// Iterates `(state, cities)` groups in first-seen state order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.states
            .iter()
            .map(|s| (s.as_str(), self.cities_in(s)))
    }

    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.all_cities
    }

    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}
