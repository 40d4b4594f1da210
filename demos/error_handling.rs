//! Error handling example for geotext-rs
//!
//! This example demonstrates proper error handling and edge cases

use geotext_core::{
    extract_countries, extract_countries_from_bytes, ExtractionResult, GeoText, GeoTextConfig,
    GeoTextError, LocationExtractor, Result,
};

/// An extractor that always fails, standing in for a broken gazetteer.
struct Unavailable;

impl LocationExtractor for Unavailable {
    fn extract(&self, _text: &str) -> Result<ExtractionResult> {
        Err(GeoTextError::Extraction("gazetteer offline".into()))
    }
}

fn main() -> Result<()> {
    println!("=== geotext-rs Error Handling Example ===\n");

    // Example 1: Handling gazetteer load errors
    println!("--- Example 1: Loading a missing lookup file ---");
    let config = GeoTextConfig::default().with_countries("/does/not/exist.json");
    match GeoText::from_config(&config) {
        Ok(_) => println!("✓ Loaded (unexpected)"),
        Err(e) => println!("✗ Failed to load gazetteer: {e}"),
    }
    println!();

    let geotext = GeoText::builtin()?;

    // Example 2: Text without countries is not an error
    println!("--- Example 2: Empty and country-free text ---");
    for text in ["", "   ", "no places mentioned here"] {
        println!("  {text:?} -> {:?}", extract_countries(&geotext, text)?);
    }
    println!();

    // Example 3: Non-text input
    println!("--- Example 3: Bytes that are not UTF-8 ---");
    match extract_countries_from_bytes(&geotext, &[0x46, 0x72, 0xff]) {
        Ok(c) => println!("  Found: {c:?}"),
        Err(GeoTextError::InvalidInput(msg)) => println!("  Invalid input: {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 4: Extractor failures reach the caller unchanged
    println!("--- Example 4: Failing extractor ---");
    match extract_countries(&Unavailable, "France") {
        Ok(c) => println!("  Found: {c:?}"),
        Err(e) => println!("  Extractor error: {e}"),
    }

    Ok(())
}
