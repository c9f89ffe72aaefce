// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{
    Config, DataConfig, GraphConfig, LandsphereToml, OutputConfig, SearchConfig,
};
use crate::error::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and applies `landsphere.toml` from the working directory.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config();
        config
    }

    /// Creates a config from an explicit file. Unlike [`Config::load`], failures are errors.
    ///
    /// # Errors
    /// Returns error if the file is unreadable or malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::apply_toml(&mut config, io::read_toml(path)?);
        Ok(config)
    }

    pub fn load_local_config(&mut self) {
        io::load_toml_config(self);
    }

    /// Applies config text on top of the current values.
    ///
    /// # Errors
    /// Returns the TOML error if the text does not match the schema.
    pub fn parse_toml(&mut self, content: &str) -> std::result::Result<(), toml::de::Error> {
        let parsed = io::parse_toml(content)?;
        io::apply_toml(self, parsed);
        Ok(())
    }

    /// Overrides the dataset location (e.g. from `--data`).
    pub fn set_data_path(&mut self, path: &Path) {
        self.data.path = path.to_path_buf();
    }
}
