// src/aggregate/summary.rs
//! Market drill-down: records per region, per state in a region, per city in a state.

use std::collections::BTreeMap;

use crate::fold::eq_ignore_case;
use crate::types::{GroupCount, PropertyRecord};

/// Record count per region, sorted by region name.
#[must_use]
pub fn region_summary(records: &[PropertyRecord]) -> Vec<GroupCount> {
    count_by(records.iter(), |r| &r.region)
}

/// Record count per state for records in `region` (case-insensitive).
#[must_use]
pub fn state_summary(records: &[PropertyRecord], region: &str) -> Vec<GroupCount> {
    count_by(
        records.iter().filter(|r| eq_ignore_case(&r.region, region)),
        |r| &r.state,
    )
}

/// Record count per city for records in `state` (case-insensitive).
#[must_use]
pub fn city_summary(records: &[PropertyRecord], state: &str) -> Vec<GroupCount> {
    count_by(
        records.iter().filter(|r| eq_ignore_case(&r.state, state)),
        |r| &r.city,
    )
}

fn count_by<'a, I, F>(records: I, key: F) -> Vec<GroupCount>
where
    I: Iterator<Item = &'a PropertyRecord>,
    F: Fn(&'a PropertyRecord) -> &'a String,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(key(record).as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(name, count)| GroupCount {
            name: name.to_string(),
            count,
        })
        .collect()
}
