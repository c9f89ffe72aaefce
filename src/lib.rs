pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod fold;
pub mod graph;
pub mod loader;
pub mod market;
pub mod reporting;
pub mod search;
pub mod types;

pub use market::Market;
