//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Cli, Commands, OutputFormat};
use super::handlers;
use crate::config::Config;
use crate::exit::LandsphereExit;
use crate::market::Market;
use crate::search::NearbyQuery;
use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

/// Global flags that apply to every subcommand.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
}

impl From<&Cli> for RunOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            data: cli.data.clone(),
            config: cli.config.clone(),
            format: cli.format,
        }
    }
}

impl RunOptions {
    /// Resolves the effective configuration from file and flags.
    ///
    /// # Errors
    /// Returns error if an explicit `--config` file is unreadable or invalid.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::load(),
        };
        if let Some(data) = &self.data {
            config.set_data_path(data);
        }
        Ok(config)
    }
}

/// Executes the parsed command: load, build, query, print.
///
/// # Errors
/// Returns error if configuration or dataset loading fails.
pub fn execute(command: Commands, options: &RunOptions) -> Result<LandsphereExit> {
    let config = options.resolve_config()?;
    debug!(data = %config.data.path.display(), "loading dataset");
    let market = Market::load(&config)?;

    let output = run(&command, &market, &config, options.format)?;
    print!("{output}");
    if options.format == OutputFormat::Json {
        println!();
    }
    Ok(LandsphereExit::Success)
}

/// Runs `command` against an already built market and returns the rendered output.
///
/// # Errors
/// Returns error if rendering fails.
pub fn run(
    command: &Commands,
    market: &Market,
    config: &Config,
    format: OutputFormat,
) -> Result<String> {
    let limit = config.output.max_results;
    match command {
        Commands::Filter { budget } => handlers::filter(market, *budget, format, limit),
        Commands::Sort { desc } => handlers::sort(market, *desc, format, limit),
        Commands::Search { target } => handlers::search(market, *target, format),
        Commands::Nearby { city } => handlers::nearby(market, city, format),
        Commands::SearchNearby {
            state,
            city,
            kind,
            price,
            margin,
        } => {
            let query = NearbyQuery {
                state: state.clone(),
                city: city.clone(),
                kind: kind.clone(),
                target_price: *price,
                margin: *margin,
            };
            handlers::search_nearby(market, &query, format, limit)
        }
        Commands::City { name } => handlers::city(market, name, format),
        Commands::Compare { names } => handlers::compare(market, names, format),
        Commands::Summary { region, state } => {
            handlers::summary(market, region.as_deref(), state.as_deref(), format)
        }
    }
}
