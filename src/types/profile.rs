//! Aggregated views over the record set.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-city statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityProfile {
    pub name: String,
    pub state: String,
    pub avg_price: f64,
    pub count: usize,
    /// Cities reachable in the locality graph, in traversal order.
    pub nearby: Vec<String>,
    pub type_distribution: BTreeMap<String, usize>,
    /// Mean price per square foot, by property type.
    pub type_avg_prices: BTreeMap<String, f64>,
}

/// Record count for one region, state or city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub name: String,
    pub count: usize,
}

/// Profiles for several cities, keyed by the requested name in request order.
///
/// Cities without data serialize as `{}` so callers can index by name blindly.
#[derive(Debug, Clone, Default)]
pub struct CityComparison {
    pub entries: Vec<(String, Option<CityProfile>)>,
}

impl CityComparison {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CityProfile> {
        self.entries
            .iter()
            .find(|(requested, _)| requested == name)
            .and_then(|(_, profile)| profile.as_ref())
    }
}

impl Serialize for CityComparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let empty = BTreeMap::<String, ()>::new();
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, profile) in &self.entries {
            match profile {
                Some(p) => map.serialize_entry(name, p)?,
                None => map.serialize_entry(name, &empty)?,
            }
        }
        map.end()
    }
}
