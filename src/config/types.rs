use serde::Deserialize;
use std::path::PathBuf;

/// Where the dataset lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

/// Tunables for the price searches.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Absolute price distance accepted by the approximate binary search.
    #[serde(default = "default_approx_tolerance")]
    pub approx_tolerance: f64,
    /// Nearby-search margin as a fraction of the target price, when none is given.
    #[serde(default = "default_margin_ratio")]
    pub default_margin_ratio: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            approx_tolerance: default_approx_tolerance(),
            default_margin_ratio: default_margin_ratio(),
        }
    }
}

impl SearchConfig {
    /// Margin used when the caller supplies none.
    #[must_use]
    pub fn margin_for(&self, target_price: f64) -> f64 {
        target_price * self.default_margin_ratio
    }
}

/// Locality graph construction settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// How many following cities in a state each city is linked to.
    #[serde(default = "default_neighbor_window")]
    pub neighbor_window: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { neighbor_window: default_neighbor_window() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Cap on records printed per list result.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { max_results: default_max_results() }
    }
}

/// Contents of `landsphere.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LandsphereToml {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub data: DataConfig,
    pub search: SearchConfig,
    pub graph: GraphConfig,
    pub output: OutputConfig,
}

fn default_data_path() -> PathBuf { PathBuf::from("data/LandSphere_India_Dataset_5000_Rows.csv") }
const fn default_approx_tolerance() -> f64 { 1000.0 }
const fn default_margin_ratio() -> f64 { 0.2 }
const fn default_neighbor_window() -> usize { 3 }
const fn default_max_results() -> usize { 102 }
