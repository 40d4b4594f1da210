// crates/geotext-core/src/model/mod.rs
pub mod geotext;
pub mod lookup;
pub mod matcher;
pub mod result;

pub use geotext::GeoText;
pub use lookup::{Gazetteer, LocationKind, LookupData, LookupEntry};
pub use matcher::KeywordMatcher;
pub use result::{ExtractionResult, LocationBucket, LocationMatch};
