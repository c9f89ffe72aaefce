// src/aggregate/profile.rs
//! City profiles: mean price, type mix and nearby cities.

use std::collections::BTreeMap;

use crate::fold::eq_ignore_case;
use crate::graph::{nearby_cities, LocalityGraph};
use crate::types::{CityComparison, CityProfile, PropertyRecord};

/// Running sums for one property type.
#[derive(Default)]
struct TypeTally {
    count: usize,
    price_per_sqft_sum: f64,
}

/// Profile of every record whose city matches `city_name` ignoring case.
///
/// Returns `None` when no record matches.
#[must_use]
pub fn city_profile(
    records: &[PropertyRecord],
    graph: &LocalityGraph,
    city_name: &str,
) -> Option<CityProfile> {
    let mut matched = records
        .iter()
        .filter(|r| eq_ignore_case(&r.city, city_name))
        .peekable();
    let first = matched.peek().copied()?;
    let name = first.city.clone();
    let state = first.state.clone();

    let mut count = 0usize;
    let mut total = 0.0;
    let mut tallies: BTreeMap<String, TypeTally> = BTreeMap::new();

    for record in matched {
        count += 1;
        total += record.price;
        let tally = tallies.entry(record.kind.clone()).or_default();
        tally.count += 1;
        tally.price_per_sqft_sum += record.price_per_sqft;
    }

    #[allow(clippy::cast_precision_loss)]
    let avg_price = total / count as f64;

    let type_distribution = tallies
        .iter()
        .map(|(kind, t)| (kind.clone(), t.count))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let type_avg_prices = tallies
        .into_iter()
        .map(|(kind, t)| (kind, t.price_per_sqft_sum / t.count as f64))
        .collect();

    let nearby = nearby_cities(graph, &name);

    Some(CityProfile {
        name,
        state,
        avg_price,
        count,
        nearby,
        type_distribution,
        type_avg_prices,
    })
}

/// Profiles for several cities, in request order. Blank names are skipped.
#[must_use]
pub fn compare_cities<S: AsRef<str>>(
    records: &[PropertyRecord],
    graph: &LocalityGraph,
    names: &[S],
) -> CityComparison {
    let entries = names
        .iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty())
        .map(|n| (n.to_string(), city_profile(records, graph, n)))
        .collect();
    CityComparison { entries }
}
