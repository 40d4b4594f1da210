//! Basic usage example for geotext-rs
//!
//! This example demonstrates how to:
//! - Pull country names out of free text
//! - Inspect the full extraction result (countries and cities)
//! - Plug in extra gazetteer entries
//! - Use the binary cache

use geotext_core::{
    extract_countries, get_countries, get_regions, Gazetteer, GeoText, GeoTextConfig, Result,
};

fn main() -> Result<()> {
    println!("=== geotext-rs Basic Usage Example ===\n");

    // Example 1: The one-liner
    println!("--- Example 1: Countries in a sentence ---");
    let text = "I visited France and Germany last year, and France again in May.";
    println!("Text: {text}");
    println!("Countries: {:?}", get_countries(text)?);
    println!("Regions (same thing): {:?}", get_regions(text)?);
    println!();

    // Example 2: Full result with spans
    println!("--- Example 2: Countries and cities with spans ---");
    let geotext = GeoText::shared()?;
    let text = "Flights from Madrid, Spain to Lima, Peru and on to São Paulo, Brasil.";
    let result = geotext.extract(text);
    for (name, m) in result.countries.iter().chain(result.cities.iter()) {
        let spans: Vec<&str> = m.spans.iter().map(|s| s.slice(text)).collect();
        println!("{name}: {} hit(s) {spans:?}", m.count);
    }
    println!();

    // Example 3: Extra entries on top of the built-in data
    println!("--- Example 3: Custom gazetteer entries ---");
    let mut gazetteer = Gazetteer::builtin()?;
    gazetteer
        .countries
        .add("Atlantis", vec!["Lost Continent".to_string()])?;
    let custom = GeoText::new(&gazetteer);
    let text = "Explorers searched the Lost Continent and Greece.";
    println!("Countries: {:?}", extract_countries(&custom, text)?);
    println!();

    // Example 4: Using the cache
    println!("--- Example 4: Cache usage ---");
    let cache = std::env::temp_dir().join("geotext-demo.bin");
    let config = GeoTextConfig::default().with_cache(&cache);

    println!("First load (will cache):");
    let start = std::time::Instant::now();
    let _g1 = GeoText::from_config(&config)?;
    println!("Time: {:?}", start.elapsed());

    println!("Second load (from cache):");
    let start = std::time::Instant::now();
    let g2 = GeoText::from_config(&config)?;
    println!("Time: {:?}", start.elapsed());
    println!();

    // Example 5: Statistics
    println!("--- Example 5: Gazetteer statistics ---");
    let stats = g2.stats();
    println!("Countries: {}", stats.countries);
    println!("Cities: {}", stats.cities);
    println!("Spellings: {}", stats.keywords);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
