//! Simple show-if block example
//!
//! This example demonstrates:
//! - Creating a TargetingEngine with a static resolver
//! - Evaluating show-if and hide-if blocks against the visitor's location
//! - Handling the show/hide verdict

use geogate_sdk::{LocationRecord, RawAttributes, StaticResolver, TargetingEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Simple Show-If Example ===\n");

    // The resolver collaborator normally wraps a geolocation database;
    // here a fixed record stands in for a visitor from Dallas, Texas.
    let visitor = LocationRecord::from_json(serde_json::json!({
        "continent": {"name": "North America", "code": "NA"},
        "country": {"name": "United States", "isoCode": "US", "geonameId": 6252001},
        "mostSpecificSubdivision": {"name": "Texas", "isoCode": "TX"},
        "city": {"name": "Dallas", "geonameId": 4684888}
    }));

    let engine = TargetingEngine::builder()
        .with_resolver(StaticResolver::new(visitor))
        .build()?;

    println!("Targeting engine initialized successfully\n");

    // A block shown to visitors from Texas or Louisiana, except Houston
    let mut attrs = RawAttributes::new();
    attrs.insert("country".to_string(), "US".to_string());
    attrs.insert("state".to_string(), "TX,LA".to_string());
    attrs.insert("not_city".to_string(), "Houston".to_string());

    println!("Block attributes:");
    println!("  country: US");
    println!("  state: TX,LA");
    println!("  not_city: Houston\n");

    let verdict = engine.show_if(&attrs)?;
    println!("Show the block: {}", verdict);

    // The same attributes as a hide-if block give the complement
    let verdict = engine.hide_if(&attrs)?;
    println!("Hide-if verdict for the same attributes: {}", verdict);

    // An OR block matches when any one condition holds
    let mut attrs = RawAttributes::new();
    attrs.insert("operator".to_string(), "or".to_string());
    attrs.insert("city".to_string(), "Berlin".to_string());
    attrs.insert("country".to_string(), "US".to_string());

    let verdict = engine.show_if(&attrs)?;
    println!("OR block (city Berlin OR country US): {}", verdict);

    Ok(())
}
