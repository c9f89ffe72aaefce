use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "landsphere", version, about = "Real-estate query engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Dataset CSV (overrides `data.path` from landsphere.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,
    /// Config file to use instead of ./landsphere.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Properties priced at or under a budget
    Filter {
        #[arg(value_name = "BUDGET")]
        budget: f64,
    },
    /// All properties sorted by price
    Sort {
        /// Most expensive first
        #[arg(long)]
        desc: bool,
    },
    /// A property priced near the target (binary search with tolerance)
    Search {
        #[arg(value_name = "TARGET")]
        target: f64,
    },
    /// Cities reachable from a city in the locality graph
    Nearby {
        #[arg(value_name = "CITY")]
        city: String,
    },
    /// Properties of a type near a price, around a city or across a state
    SearchNearby {
        #[arg(long)]
        state: String,
        #[arg(long)]
        city: Option<String>,
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,
        #[arg(long, default_value = "0")]
        price: f64,
        /// Absolute price margin (default: a fraction of the price, see config)
        #[arg(long)]
        margin: Option<f64>,
    },
    /// Statistics for one city
    City {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Statistics for several cities (space or comma separated)
    Compare {
        #[arg(value_name = "NAME", required = true, num_args = 1.., value_delimiter = ',')]
        names: Vec<String>,
    },
    /// Listing counts by region, by state in a region, or by city in a state
    Summary {
        /// Ignored when --state is given
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        state: Option<String>,
    },
}
