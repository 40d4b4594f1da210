// crates/geotext-core/src/lib.rs

//! Gazetteer-backed extraction of country and city names from free text.
//!
//! ```rust
//! let countries = geotext_core::get_countries("I visited France and Germany last year").unwrap();
//! assert_eq!(countries, ["France", "Germany"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod countries;
pub mod error;
pub mod loader;
pub mod model;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::GazetteerStats;
pub use crate::config::GeoTextConfig;
pub use crate::countries::{
    extract_countries, extract_countries_from_bytes, get_countries, get_regions, text_from_bytes,
};
pub use crate::error::{GeoTextError, Result};
pub use crate::loader::CacheFingerprint;
pub use crate::model::{
    ExtractionResult, Gazetteer, GeoText, KeywordMatcher, LocationBucket, LocationKind,
    LocationMatch, LookupData, LookupEntry,
};
pub use crate::traits::LocationExtractor;
