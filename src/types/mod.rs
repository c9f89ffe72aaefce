//! Common data structures shared by the engine, the loader and the reporters.

mod profile;
mod property;

pub use profile::{CityComparison, CityProfile, GroupCount};
pub use property::{Priced, PropertyRecord, PropertyView};
