//! The property record and its output projection.

use serde::{Deserialize, Serialize};

/// One row of the property dataset. Built once at load time and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "Property_ID")]
    pub id: u64,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Property_Type")]
    pub kind: String,
    #[serde(rename = "Area_SqFt")]
    pub area: u32,
    #[serde(rename = "Price_Per_SqFt")]
    pub price_per_sqft: f64,
    #[serde(rename = "Current_Price")]
    pub price: f64,
    #[serde(rename = "Year_Built")]
    pub year_built: i32,
    #[serde(rename = "Growth_Rate")]
    pub growth_rate: f64,
    #[serde(rename = "Risk_Score")]
    pub risk_score: i32,
}

/// Anything the search engine can order and probe by price.
pub trait Priced {
    fn price(&self) -> f64;
}

impl Priced for PropertyRecord {
    fn price(&self) -> f64 {
        self.price
    }
}

impl<T: Priced + ?Sized> Priced for &T {
    fn price(&self) -> f64 {
        (**self).price()
    }
}

/// Compact listing shape used when rendering query results.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyView<'a> {
    #[serde(rename = "Property_ID")]
    pub id: u64,
    #[serde(rename = "City")]
    pub city: &'a str,
    #[serde(rename = "Property_Type")]
    pub kind: &'a str,
    #[serde(rename = "Area_SqFt")]
    pub area: u32,
    #[serde(rename = "Price_Per_SqFt")]
    pub price_per_sqft: f64,
    #[serde(rename = "Current_Price")]
    pub price: f64,
}

impl<'a> From<&'a PropertyRecord> for PropertyView<'a> {
    fn from(record: &'a PropertyRecord) -> Self {
        Self {
            id: record.id,
            city: &record.city,
            kind: &record.kind,
            area: record.area,
            price_per_sqft: round_cents(record.price_per_sqft),
            price: round_cents(record.price),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
