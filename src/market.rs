// src/market.rs
//! The loaded dataset and everything derived from it.
//!
//! A [`Market`] is built once per invocation and passed explicitly to each
//! query; nothing is cached between runs.

use tracing::debug;

use crate::aggregate;
use crate::config::{Config, GraphConfig, SearchConfig};
use crate::error::Result;
use crate::graph::{self, GraphEngine, LocalityGraph};
use crate::loader;
use crate::search::{self, NearbyQuery};
use crate::types::{CityComparison, CityProfile, GroupCount, PropertyRecord};

/// Records, their locality graph and the search tunables.
#[derive(Debug, Clone)]
pub struct Market {
    records: Vec<PropertyRecord>,
    graph: LocalityGraph,
    search: SearchConfig,
}

impl Market {
    /// Loads the dataset named by `config.data.path` and builds the graph.
    ///
    /// # Errors
    /// Returns error if the dataset cannot be read or parsed.
    pub fn load(config: &Config) -> Result<Self> {
        let records = loader::load_records(&config.data.path)?;
        Ok(Self::from_records(records, &config.graph, config.search.clone()))
    }

    #[must_use]
    pub fn from_records(
        records: Vec<PropertyRecord>,
        graph_config: &GraphConfig,
        search: SearchConfig,
    ) -> Self {
        let graph = GraphEngine::build(&records, graph_config.neighbor_window);
        debug!(records = records.len(), "market ready");
        Self { records, graph, search }
    }

    /// Builds a market with default graph and search settings.
    #[must_use]
    pub fn with_defaults(records: Vec<PropertyRecord>) -> Self {
        Self::from_records(records, &GraphConfig::default(), SearchConfig::default())
    }

    #[must_use]
    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    #[must_use]
    pub fn graph(&self) -> &LocalityGraph {
        &self.graph
    }

    /// Records priced at or under `budget`, in dataset order.
    #[must_use]
    pub fn linear_search(&self, budget: f64) -> Vec<&PropertyRecord> {
        search::linear_search(&self.records, budget)
    }

    /// All records, ascending by price (stable).
    #[must_use]
    pub fn sorted_by_price(&self) -> Vec<&PropertyRecord> {
        let mut sorted: Vec<&PropertyRecord> = self.records.iter().collect();
        search::merge_sort(&mut sorted);
        sorted
    }

    /// Any record on the binary-search probe path within the configured tolerance.
    #[must_use]
    pub fn approx_price_search(&self, target: f64) -> Option<&PropertyRecord> {
        let sorted = self.sorted_by_price();
        search::approx_price_search(&sorted, target, self.search.approx_tolerance).copied()
    }

    /// Cities reachable from `city`, BFS order. The name is matched ignoring case.
    #[must_use]
    pub fn nearby_cities(&self, city: &str) -> Vec<String> {
        self.graph
            .resolve(city)
            .map(|name| graph::nearby_cities(&self.graph, name))
            .unwrap_or_default()
    }

    /// Nearby search; a query without a margin uses the configured ratio.
    #[must_use]
    pub fn search_nearby(&self, query: &NearbyQuery) -> Vec<&PropertyRecord> {
        let margin = query
            .margin
            .unwrap_or_else(|| self.search.margin_for(query.target_price));
        search::search_nearby(&self.records, &self.graph, query, margin)
    }

    #[must_use]
    pub fn city_profile(&self, city: &str) -> Option<CityProfile> {
        aggregate::city_profile(&self.records, &self.graph, city)
    }

    #[must_use]
    pub fn compare_cities<S: AsRef<str>>(&self, names: &[S]) -> CityComparison {
        aggregate::compare_cities(&self.records, &self.graph, names)
    }

    #[must_use]
    pub fn region_summary(&self) -> Vec<GroupCount> {
        aggregate::region_summary(&self.records)
    }

    #[must_use]
    pub fn state_summary(&self, region: &str) -> Vec<GroupCount> {
        aggregate::state_summary(&self.records, region)
    }

    #[must_use]
    pub fn city_summary(&self, state: &str) -> Vec<GroupCount> {
        aggregate::city_summary(&self.records, state)
    }
}
