//! Output formatting for query results.
//!
//! JSON is the machine contract: record lists use the compact listing shape
//! and are capped at `output.max_results` entries, and a missing single
//! result prints as `{}`. The text format is for humans at a terminal.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

use crate::types::{CityComparison, CityProfile, GroupCount, PropertyRecord, PropertyView};

/// JSON array of listing views, truncated to `limit` entries.
///
/// # Errors
/// Returns error if serialization fails.
pub fn records_json(records: &[&PropertyRecord], limit: usize) -> Result<String> {
    let views: Vec<PropertyView> = records
        .iter()
        .take(limit)
        .map(|r| PropertyView::from(*r))
        .collect();
    Ok(serde_json::to_string(&views)?)
}

/// JSON object for an optional result; `None` becomes `{}`.
///
/// # Errors
/// Returns error if serialization fails.
pub fn optional_json<T: Serialize>(value: Option<&T>) -> Result<String> {
    match value {
        Some(v) => Ok(serde_json::to_string(v)?),
        None => Ok("{}".to_string()),
    }
}

/// Optional single record as JSON, in the listing shape.
///
/// # Errors
/// Returns error if serialization fails.
pub fn record_json(record: Option<&PropertyRecord>) -> Result<String> {
    optional_json(record.map(PropertyView::from).as_ref())
}

/// Table of records for the terminal.
#[must_use]
pub fn records_text(records: &[&PropertyRecord], limit: usize) -> String {
    let mut out = String::new();
    if records.is_empty() {
        let _ = writeln!(out, "{}", "No matching properties.".yellow());
        return out;
    }

    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:>8}  {:<20} {:<14} {:>9} {:>12} {:>16}",
            "ID", "City", "Type", "Area", "Price/sqft", "Price"
        )
        .bold()
    );
    for r in records.iter().take(limit) {
        let _ = writeln!(
            out,
            "{:>8}  {:<20} {:<14} {:>9} {:>12.2} {:>16}",
            r.id,
            r.city,
            r.kind,
            r.area,
            r.price_per_sqft,
            format!("{:.2}", r.price).green()
        );
    }
    if records.len() > limit {
        let _ = writeln!(
            out,
            "{}",
            format!("  … {} more not shown", records.len() - limit).dimmed()
        );
    }
    out
}

#[must_use]
pub fn record_text(record: Option<&PropertyRecord>) -> String {
    match record {
        Some(r) => records_text(&[r], 1),
        None => format!("{}\n", "No property within tolerance.".yellow()),
    }
}

#[must_use]
pub fn cities_text(cities: &[String]) -> String {
    if cities.is_empty() {
        return format!("{}\n", "No nearby cities.".yellow());
    }
    let mut out = String::new();
    for (i, city) in cities.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {city}", i + 1);
    }
    out
}

#[must_use]
pub fn profile_text(profile: Option<&CityProfile>) -> String {
    let Some(p) = profile else {
        return format!("{}\n", "No data for this city.".yellow());
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", p.name.cyan().bold(), p.state);
    let _ = writeln!(out, "  listings:  {}", p.count);
    let _ = writeln!(out, "  avg price: {}", format!("{:.2}", p.avg_price).green());
    let _ = writeln!(out, "  by type:");
    for (kind, count) in &p.type_distribution {
        let avg = p.type_avg_prices.get(kind).copied().unwrap_or_default();
        let _ = writeln!(out, "    {kind:<14} {count:>5}  {avg:>10.2}/sqft");
    }
    let nearby = if p.nearby.is_empty() {
        "-".to_string()
    } else {
        p.nearby.join(", ")
    };
    let _ = writeln!(out, "  nearby:    {}", nearby.dimmed());
    out
}

#[must_use]
pub fn comparison_text(cmp: &CityComparison) -> String {
    let mut out = String::new();
    for (name, profile) in &cmp.entries {
        if profile.is_none() {
            let _ = writeln!(out, "{} {}", name.cyan().bold(), "(no data)".yellow());
            continue;
        }
        out.push_str(&profile_text(profile.as_ref()));
    }
    out
}

#[must_use]
pub fn groups_text(groups: &[GroupCount]) -> String {
    if groups.is_empty() {
        return format!("{}\n", "Nothing listed here.".yellow());
    }
    let mut out = String::new();
    for g in groups {
        let _ = writeln!(out, "  {:<24} {:>6}", g.name, g.count);
    }
    out
}
