// src/search/mod.rs
//! Price-based queries over the record set.

pub mod approx;
pub mod filter;
pub mod nearby;
pub mod sort;

pub use approx::approx_price_search;
pub use filter::linear_search;
pub use nearby::{search_nearby, NearbyQuery};
pub use sort::merge_sort;
