// crates/geotext-core/src/loader/mod.rs

//! # Gazetteer Loader
//!
//! Handles the Physical Layer (I/O, Decompression, bincode cache) and the
//! process-wide shared extractor.

use crate::config::GeoTextConfig;
use crate::error::{GeoTextError, Result};
use crate::model::{Gazetteer, GeoText, LocationKind, LookupData};
use once_cell::sync::OnceCell;
use std::path::Path;

mod builder;
pub mod common_io;

pub use builder::{CacheFingerprint, CompressionMode};

static SHARED_GEOTEXT: OnceCell<GeoText> = OnceCell::new();

const BUILTIN_COUNTRIES: &str = include_str!("../../data/countries.json");
const BUILTIN_CITIES: &str = include_str!("../../data/cities.json");

impl Gazetteer {
    /// The demo gazetteer compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            countries: LookupData::from_json_str(LocationKind::Country, BUILTIN_COUNTRIES)?,
            cities: LookupData::from_json_str(LocationKind::City, BUILTIN_CITIES)?,
        })
    }

    /// Assemble the gazetteer a configuration describes.
    pub fn from_config(config: &GeoTextConfig) -> Result<Self> {
        let mut gazetteer = if config.use_builtin_data {
            Self::builtin()?
        } else {
            Self::default()
        };

        if let Some(path) = &config.countries_path {
            gazetteer
                .countries
                .extend(load_lookup(path, LocationKind::Country)?)?;
        }
        if let Some(path) = &config.cities_path {
            gazetteer
                .cities
                .extend(load_lookup(path, LocationKind::City)?)?;
        }

        if gazetteer.is_empty() {
            return Err(GeoTextError::InvalidData(
                "no gazetteer data configured".into(),
            ));
        }
        Ok(gazetteer)
    }
}

/// Read one `{name: [synonyms]}` lookup file (`.json` or `.json.gz`).
pub fn load_lookup(path: impl AsRef<Path>, kind: LocationKind) -> Result<LookupData> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let data = LookupData::from_json_reader(kind, reader)?;
    tracing::debug!(
        path = %path.display(),
        kind = kind.bucket(),
        entries = data.len(),
        "lookup file loaded"
    );
    Ok(data)
}

impl GeoText {
    /// Extractor over the built-in demo gazetteer.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(&Gazetteer::builtin()?))
    }

    /// Build (or read from cache) the extractor a configuration describes.
    ///
    /// A cache is only used when it was built from the same inputs (see
    /// [`CacheFingerprint`]) and is newer than every configured lookup file.
    /// Writing the cache is best-effort.
    pub fn from_config(config: &GeoTextConfig) -> Result<Self> {
        let fingerprint = CacheFingerprint::from_config(config);

        if let Some(cache) = &config.cache_path {
            if common_io::is_cache_fresh(cache, &config.source_paths()) {
                match Self::load_binary(cache, &fingerprint) {
                    Ok(geotext) => {
                        tracing::debug!(cache = %cache.display(), "extractor loaded from cache");
                        return Ok(geotext);
                    }
                    Err(e) => {
                        tracing::warn!(cache = %cache.display(), error = %e, "ignoring stale or unreadable cache")
                    }
                }
            }
        }

        let geotext = Self::new(&Gazetteer::from_config(config)?);

        if let Some(cache) = &config.cache_path {
            match geotext.save_as(cache, &fingerprint) {
                Ok(()) => tracing::info!(cache = %cache.display(), "extractor cache written"),
                Err(e) => {
                    tracing::warn!(cache = %cache.display(), error = %e, "could not write cache")
                }
            }
        }

        Ok(geotext)
    }

    /// The process-wide extractor, built on first use from
    /// [`GeoTextConfig::from_env`].
    ///
    /// Initialization runs at most once successfully; a failed attempt is
    /// returned to the caller and retried on the next call.
    pub fn shared() -> Result<&'static GeoText> {
        SHARED_GEOTEXT.get_or_try_init(|| {
            let config = GeoTextConfig::from_env();
            tracing::debug!(?config, "initializing shared extractor");
            Self::from_config(&config)
        })
    }
}
