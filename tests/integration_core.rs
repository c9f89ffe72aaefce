// tests/integration_core.rs
//! End to end: CSV on disk → market → rendered command output.

use landsphere_core::cli::dispatch::run;
use landsphere_core::cli::{Commands, OutputFormat};
use landsphere_core::config::Config;
use landsphere_core::loader::load_records;
use landsphere_core::Market;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const CSV: &str = "\
Property_ID,Region,State,City,Property_Type,Area_SqFt,Price_Per_SqFt,Current_Price,Year_Built,Growth_Rate,Risk_Score
1,West,Maharashtra,Mumbai,Residential,1000,20000,20000000,2020,0.1,3
2,West,Maharashtra,Pune,Residential,1200,8000,9600000,2019,0.09,4
3,West,Maharashtra,Nagpur,Commercial,900,6000,5400000,2021,0.12,6
4,West,Maharashtra,Nashik,Residential,1500,6500,9750000,2018,0.07,5
5,West,Maharashtra,Thane,Residential,800,12000,9600000,2022,0.11,2
6,South,Kerala,Kochi,Residential,1100,5000,5500000,2020,0.08,4
7,South,Kerala,Kollam,Agricultural,5000,900,4500000,2019,0.05,7
8,West,Maharashtra,Mumbai,Commercial,600,30000,18000000,2023,0.13,5
";

fn fixture() -> (TempDir, Config) {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("homes.csv");
    fs::write(&path, CSV).unwrap();
    let mut config = Config::new();
    config.set_data_path(&path);
    (d, config)
}

fn json(command: &Commands) -> Value {
    let (_d, config) = fixture();
    let market = Market::load(&config).unwrap();
    let out = run(command, &market, &config, OutputFormat::Json).unwrap();
    serde_json::from_str(&out).unwrap()
}

fn ids(v: &Value) -> Vec<u64> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|r| r["Property_ID"].as_u64().unwrap())
        .collect()
}

#[test]
fn test_load_from_disk() {
    let (_d, config) = fixture();
    let records = load_records(&config.data.path).unwrap();
    assert_eq!(records.len(), 8);
    assert_eq!(records[7].city, "Mumbai");
}

#[test]
fn test_filter_command() {
    let v = json(&Commands::Filter { budget: 9_600_000.0 });
    assert_eq!(ids(&v), vec![2, 3, 5, 6, 7]);
}

#[test]
fn test_sort_command_ascending_and_desc() {
    let asc = json(&Commands::Sort { desc: false });
    assert_eq!(ids(&asc), vec![7, 3, 6, 2, 5, 4, 8, 1]);
    let desc = json(&Commands::Sort { desc: true });
    assert_eq!(ids(&desc), vec![1, 8, 4, 5, 2, 6, 3, 7]);
}

#[test]
fn test_search_command_hit_and_miss() {
    let hit = json(&Commands::Search { target: 9_600_500.0 });
    assert_eq!(hit["Current_Price"].as_f64(), Some(9_600_000.0));
    let miss = json(&Commands::Search { target: 1.0 });
    assert_eq!(miss, serde_json::json!({}));
}

#[test]
fn test_nearby_command() {
    let v = json(&Commands::Nearby { city: "mumbai".into() });
    assert_eq!(v["nearby"], serde_json::json!(["Pune", "Nagpur", "Nashik", "Thane"]));
    let none = json(&Commands::Nearby { city: "Atlantis".into() });
    assert_eq!(none["nearby"], serde_json::json!([]));
}

#[test]
fn test_search_nearby_command_default_margin() {
    let v = json(&Commands::SearchNearby {
        state: "maharashtra".into(),
        city: Some("Pune".into()),
        kind: "residential".into(),
        price: 10_000_000.0,
        margin: None,
    });
    // 20% margin: [8M, 12M].
    assert_eq!(ids(&v), vec![2, 4, 5]);
}

#[test]
fn test_search_nearby_command_state_only() {
    let v = json(&Commands::SearchNearby {
        state: "KERALA".into(),
        city: None,
        kind: "Agricultural".into(),
        price: 4_500_000.0,
        margin: Some(0.0),
    });
    assert_eq!(ids(&v), vec![7]);
}

#[test]
fn test_city_command() {
    let v = json(&Commands::City { name: "MUMBAI".into() });
    assert_eq!(v["name"], "Mumbai");
    assert_eq!(v["state"], "Maharashtra");
    assert_eq!(v["count"], 2);
    assert_eq!(v["avg_price"].as_f64(), Some(19_000_000.0));
    assert_eq!(v["type_distribution"]["Commercial"], 1);
    assert_eq!(v["type_avg_prices"]["Residential"].as_f64(), Some(20_000.0));
    assert_eq!(v["nearby"].as_array().map(Vec::len), Some(4));

    let none = json(&Commands::City { name: "Atlantis".into() });
    assert_eq!(none, serde_json::json!({}));
}

#[test]
fn test_compare_command() {
    let v = json(&Commands::Compare {
        names: vec!["Kochi".into(), "Atlantis".into()],
    });
    assert_eq!(v["Kochi"]["count"], 1);
    assert_eq!(v["Kochi"]["nearby"], serde_json::json!(["Kollam"]));
    assert_eq!(v["Atlantis"], serde_json::json!({}));
}

#[test]
fn test_summary_command_drilldown() {
    let regions = json(&Commands::Summary { region: None, state: None });
    assert_eq!(
        regions,
        serde_json::json!([{"name": "South", "count": 2}, {"name": "West", "count": 6}])
    );
    let states = json(&Commands::Summary { region: Some("west".into()), state: None });
    assert_eq!(states, serde_json::json!([{"name": "Maharashtra", "count": 6}]));
    let cities = json(&Commands::Summary { region: None, state: Some("Kerala".into()) });
    assert_eq!(
        cities,
        serde_json::json!([{"name": "Kochi", "count": 1}, {"name": "Kollam", "count": 1}])
    );
}

#[test]
fn test_output_cap_applies() {
    let (_d, mut config) = fixture();
    config.output.max_results = 2;
    let market = Market::load(&config).unwrap();
    let out = run(&Commands::Sort { desc: false }, &market, &config, OutputFormat::Json).unwrap();
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(ids(&v), vec![7, 3]);
}

#[test]
fn test_text_format_renders() {
    colored::control::set_override(false);
    let (_d, config) = fixture();
    let market = Market::load(&config).unwrap();
    let out = run(&Commands::City { name: "Kochi".into() }, &market, &config, OutputFormat::Text)
        .unwrap();
    assert!(out.contains("Kochi (Kerala)"));
    assert!(out.contains("Kollam"));
}

#[test]
fn test_missing_dataset_is_error() {
    let mut config = Config::new();
    config.set_data_path(std::path::Path::new("no/such/file.csv"));
    assert!(Market::load(&config).is_err());
}
