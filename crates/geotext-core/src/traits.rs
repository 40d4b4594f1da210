// crates/geotext-core/src/traits.rs
use crate::error::Result;
use crate::model::{ExtractionResult, GeoText};

/// Anything that can turn free text into bucketed location matches.
///
/// [`GeoText`] is the production implementation. The country facade only
/// depends on this trait, so tests can hand it a stand-in.
///
/// # Examples
/// ```rust
/// use geotext_core::traits::LocationExtractor;
/// use geotext_core::{ExtractionResult, Result};
///
/// struct Nothing;
/// impl LocationExtractor for Nothing {
///     fn extract(&self, _text: &str) -> Result<ExtractionResult> {
///         Ok(ExtractionResult::default())
///     }
/// }
///
/// let countries = geotext_core::extract_countries(&Nothing, "France").unwrap();
/// assert!(countries.is_empty());
/// ```
pub trait LocationExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<ExtractionResult>;
}

impl LocationExtractor for GeoText {
    #[inline]
    fn extract(&self, text: &str) -> Result<ExtractionResult> {
        Ok(GeoText::extract(self, text))
    }
}

impl<T: LocationExtractor + ?Sized> LocationExtractor for &T {
    #[inline]
    fn extract(&self, text: &str) -> Result<ExtractionResult> {
        (**self).extract(text)
    }
}
