// src/config/io.rs
//! Reading `landsphere.toml`.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::types::{Config, LandsphereToml};
use crate::error::{LandsphereError, Result};

pub const CONFIG_FILE: &str = "landsphere.toml";

/// Loads `landsphere.toml` from the working directory if present.
///
/// A broken implicit file is reported and ignored.
pub fn load_toml_config(config: &mut Config) {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return;
    }
    match read_toml(path) {
        Ok(parsed) => apply_toml(config, parsed),
        Err(e) => warn!("ignoring {CONFIG_FILE}: {e}"),
    }
}

/// Reads and parses a config file.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid TOML for the schema.
pub fn read_toml(path: &Path) -> Result<LandsphereToml> {
    let content = fs::read_to_string(path).map_err(|source| LandsphereError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let parsed = parse_toml(&content).map_err(|source| LandsphereError::Config {
        source,
        path: path.to_path_buf(),
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(parsed)
}

/// Parses config text.
///
/// # Errors
/// Returns the TOML deserialization error.
pub fn parse_toml(content: &str) -> std::result::Result<LandsphereToml, toml::de::Error> {
    toml::from_str(content)
}

pub fn apply_toml(config: &mut Config, parsed: LandsphereToml) {
    config.data = parsed.data;
    config.search = parsed.search;
    config.graph = parsed.graph;
    config.output = parsed.output;
}
