// crates/geotext-core/src/countries.rs

//! Country extraction facade.
//!
//! Everything here delegates to a [`LocationExtractor`]; the only work done
//! locally is picking the `countries` bucket and listing its names.

use crate::error::{GeoTextError, Result};
use crate::model::GeoText;
use crate::traits::LocationExtractor;

/// Distinct country names mentioned in `text`, in order of first occurrence.
///
/// Text without any known country (including the empty string) yields an
/// empty list. Errors from `extractor` are returned unchanged.
pub fn extract_countries<E>(extractor: &E, text: &str) -> Result<Vec<String>>
where
    E: LocationExtractor + ?Sized,
{
    let result = extractor.extract(text)?;
    Ok(result.countries.names().map(str::to_owned).collect())
}

/// Like [`extract_countries`], for raw bytes that should hold UTF-8 text.
///
/// Fails with [`GeoTextError::InvalidInput`] when they don't.
pub fn extract_countries_from_bytes<E>(extractor: &E, bytes: &[u8]) -> Result<Vec<String>>
where
    E: LocationExtractor + ?Sized,
{
    extract_countries(extractor, text_from_bytes(bytes)?)
}

/// View `bytes` as UTF-8 text, or fail with [`GeoTextError::InvalidInput`].
pub fn text_from_bytes(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes)
        .map_err(|e| GeoTextError::InvalidInput(format!("input is not UTF-8 text: {e}")))
}

/// [`extract_countries`] against the shared extractor ([`GeoText::shared`]).
pub fn get_countries(text: &str) -> Result<Vec<String>> {
    extract_countries(GeoText::shared()?, text)
}

/// Same as [`get_countries`].
///
/// Despite the name this returns countries, not sub-national regions or
/// cities. It is kept for callers that use the older name.
pub fn get_regions(text: &str) -> Result<Vec<String>> {
    get_countries(text)
}
