// src/cli/handlers/mod.rs
//! Query command handlers. Each runs one query and renders it.

use crate::cli::args::OutputFormat;
use crate::market::Market;
use crate::reporting;
use crate::search::NearbyQuery;
use crate::types::PropertyRecord;
use anyhow::Result;

pub fn filter(market: &Market, budget: f64, format: OutputFormat, limit: usize) -> Result<String> {
    let hits = market.linear_search(budget);
    render_records(&hits, format, limit)
}

pub fn sort(market: &Market, desc: bool, format: OutputFormat, limit: usize) -> Result<String> {
    let mut sorted = market.sorted_by_price();
    if desc {
        sorted.reverse();
    }
    render_records(&sorted, format, limit)
}

pub fn search(market: &Market, target: f64, format: OutputFormat) -> Result<String> {
    let found = market.approx_price_search(target);
    match format {
        OutputFormat::Json => reporting::record_json(found),
        OutputFormat::Text => Ok(reporting::record_text(found)),
    }
}

pub fn nearby(market: &Market, city: &str, format: OutputFormat) -> Result<String> {
    let cities = market.nearby_cities(city);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({ "nearby": cities }))?),
        OutputFormat::Text => Ok(reporting::cities_text(&cities)),
    }
}

pub fn search_nearby(
    market: &Market,
    query: &NearbyQuery,
    format: OutputFormat,
    limit: usize,
) -> Result<String> {
    let hits = market.search_nearby(query);
    render_records(&hits, format, limit)
}

pub fn city(market: &Market, name: &str, format: OutputFormat) -> Result<String> {
    let profile = market.city_profile(name);
    match format {
        OutputFormat::Json => reporting::optional_json(profile.as_ref()),
        OutputFormat::Text => Ok(reporting::profile_text(profile.as_ref())),
    }
}

pub fn compare(market: &Market, names: &[String], format: OutputFormat) -> Result<String> {
    let cmp = market.compare_cities(names);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&cmp)?),
        OutputFormat::Text => Ok(reporting::comparison_text(&cmp)),
    }
}

/// Drill-down: cities of `state`, else states of `region`, else all regions.
pub fn summary(
    market: &Market,
    region: Option<&str>,
    state: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let groups = match (state, region) {
        (Some(state), _) => market.city_summary(state),
        (None, Some(region)) => market.state_summary(region),
        (None, None) => market.region_summary(),
    };
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&groups)?),
        OutputFormat::Text => Ok(reporting::groups_text(&groups)),
    }
}

fn render_records(
    records: &[&PropertyRecord],
    format: OutputFormat,
    limit: usize,
) -> Result<String> {
    match format {
        OutputFormat::Json => reporting::records_json(records, limit),
        OutputFormat::Text => Ok(reporting::records_text(records, limit)),
    }
}
