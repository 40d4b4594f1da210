// crates/geotext-core/src/model/geotext.rs
use super::lookup::{Gazetteer, LocationKind};
use super::matcher::KeywordMatcher;
use super::result::ExtractionResult;
use crate::common::GazetteerStats;
use serde::{Deserialize, Serialize};

/// The compiled extractor: one keyword matcher per location kind.
///
/// Immutable once built, so a single instance can be shared across threads
/// (see [`GeoText::shared`](crate::GeoText::shared)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoText {
    pub(crate) countries: KeywordMatcher,
    pub(crate) cities: KeywordMatcher,
}

impl GeoText {
    /// Compile a gazetteer.
    pub fn new(gazetteer: &Gazetteer) -> Self {
        Self {
            countries: KeywordMatcher::build(&gazetteer.countries),
            cities: KeywordMatcher::build(&gazetteer.cities),
        }
    }

    /// Extract every known country and city mentioned in `text`.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        self.countries.find_into(text, &mut result.countries);
        self.cities.find_into(text, &mut result.cities);
        result
    }

    /// Matcher for one location kind.
    pub fn matcher(&self, kind: LocationKind) -> &KeywordMatcher {
        match kind {
            LocationKind::Country => &self.countries,
            LocationKind::City => &self.cities,
        }
    }

    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            countries: self.countries.len(),
            cities: self.cities.len(),
            keywords: self.countries.keyword_count() + self.cities.keyword_count(),
        }
    }
}
