// src/aggregate/mod.rs
//! Per-city statistics and market drill-down counts.

pub mod profile;
pub mod summary;

pub use profile::{city_profile, compare_cities};
pub use summary::{city_summary, region_summary, state_summary};
