//! Content gating pipeline example
//!
//! This example demonstrates the full decision flow:
//! - Extension hooks rewriting the condition set and the resolved record
//! - Property queries rendering record fields as display strings
//! - Per-block language and cache options reaching the resolver

use geogate_sdk::{
    ConditionSet, LocationRecord, RawAttributes, StaticResolver, TargetingEngine,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    println!("=== Content Gating Pipeline Example ===\n");

    // Detected location: Berlin, Germany
    let detected = LocationRecord::from_json(serde_json::json!({
        "continent": {"name": "Europe", "code": "EU"},
        "country": {"name": "Germany", "isoCode": "DE", "isInEuropeanUnion": true},
        "city": {"name": "Berlin", "geonameId": 2950159},
        "location": {"timeZone": "Europe/Berlin"}
    }));

    // A record hook preferring the address from the visitor's profile
    // over the detected location, when the block opts in
    let profile = LocationRecord::from_json(serde_json::json!({
        "country": {"name": "France", "isoCode": "FR", "isInEuropeanUnion": true},
        "city": {"name": "Paris"}
    }));
    let prefer_profile =
        move |record: LocationRecord, attrs: &RawAttributes, _show_if: bool| {
            if attrs.get("use_profile").map(String::as_str) == Some("yes") {
                profile.clone()
            } else {
                record
            }
        };

    // A condition-set hook that only observes, useful for audit logging
    let log_conditions = |set: ConditionSet, _attrs: &RawAttributes, show_if: bool| {
        tracing::info!(conditions = set.len(), show_if, "parsed content block");
        set
    };

    let engine = TargetingEngine::builder()
        .with_resolver(StaticResolver::new(detected))
        .add_condition_set_hook(log_conditions)
        .add_record_hook(prefer_profile)
        .build()?;

    println!("Engine initialized with 2 extension hooks\n");

    // Test Case 1: EU-only block against the detected location
    println!("=== Test Case 1: EU-only block, detected location ===");
    let mut attrs = RawAttributes::new();
    attrs.insert("property".to_string(), "country.isInEuropeanUnion".to_string());
    attrs.insert("property_value".to_string(), "true".to_string());
    println!("Show the block: {}\n", engine.show_if(&attrs)?);

    // Test Case 2: the same block with the profile override active
    println!("=== Test Case 2: city block, profile override ===");
    let mut attrs = RawAttributes::new();
    attrs.insert("city".to_string(), "Berlin".to_string());
    attrs.insert("use_profile".to_string(), "yes".to_string());
    println!("Show the Berlin block: {}", engine.show_if(&attrs)?);

    attrs.insert("city".to_string(), "Paris".to_string());
    println!("Show the Paris block: {}\n", engine.show_if(&attrs)?);

    // Test Case 3: property queries for template output
    println!("=== Test Case 3: property queries ===");
    let mut attrs = RawAttributes::new();
    attrs.insert("property".to_string(), "country".to_string());
    println!("Visitor country: {}", engine.query_property(&attrs)?);

    attrs.insert("property".to_string(), "location.timeZone".to_string());
    println!("Visitor time zone: {}", engine.query_property(&attrs)?);

    attrs.insert("property".to_string(), "postal.code".to_string());
    attrs.insert("default".to_string(), "unknown".to_string());
    println!("Visitor postal code: {}", engine.query_property(&attrs)?);

    Ok(())
}
