// crates/geotext-core/src/loader/builder.rs
use super::{BUILTIN_CITIES, BUILTIN_COUNTRIES};
use crate::config::GeoTextConfig;
use crate::error::{GeoTextError, Result};
use crate::model::GeoText;
use bincode::Options;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

// Caches beyond this size are rejected instead of deserialized.
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when `compact` is enabled.
    pub fn active() -> Self {
        #[cfg(feature = "compact")]
        return CompressionMode::Gzip;
        #[cfg(not(feature = "compact"))]
        return CompressionMode::None;
    }
}

/// Identifies the inputs a cached extractor was compiled from.
///
/// A cache is only reused by a configuration with the same fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheFingerprint {
    pub use_builtin_data: bool,
    pub countries_path: Option<PathBuf>,
    pub cities_path: Option<PathBuf>,
    /// SHA-256 of the embedded lookup tables, all zero when they are unused.
    pub builtin_digest: [u8; 32],
}

impl CacheFingerprint {
    pub fn from_config(config: &GeoTextConfig) -> Self {
        let mut builtin_digest = [0u8; 32];
        if config.use_builtin_data {
            let digest = Sha256::new()
                .chain_update(BUILTIN_COUNTRIES.as_bytes())
                .chain_update(BUILTIN_CITIES.as_bytes())
                .finalize();
            builtin_digest.copy_from_slice(&digest);
        }

        Self {
            use_builtin_data: config.use_builtin_data,
            countries_path: config.countries_path.clone(),
            cities_path: config.cities_path.clone(),
            builtin_digest,
        }
    }
}

#[derive(Serialize)]
struct CacheRef<'a> {
    fingerprint: &'a CacheFingerprint,
    geotext: &'a GeoText,
}

#[derive(Deserialize)]
struct CacheOwned {
    fingerprint: CacheFingerprint,
    geotext: GeoText,
}

impl GeoText {
    /// Write the compiled extractor as a bincode cache tagged with `fingerprint`.
    pub fn save_as(&self, path: impl AsRef<Path>, fingerprint: &CacheFingerprint) -> Result<()> {
        let cache = CacheRef {
            fingerprint,
            geotext: self,
        };
        write_generic(path.as_ref(), &cache, CompressionMode::active())
    }

    /// Read a cache written by [`GeoText::save_as`].
    ///
    /// Fails with [`GeoTextError::InvalidData`] when the cache was built
    /// from other inputs than `expected` describes.
    pub fn load_binary(path: impl AsRef<Path>, expected: &CacheFingerprint) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GeoTextError::NotFound(format!("Cache not found at {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let stream: Box<dyn Read> = match CompressionMode::active() {
            #[cfg(feature = "compact")]
            CompressionMode::Gzip => Box::new(GzDecoder::new(reader)),
            _ => Box::new(reader),
        };

        let cache: CacheOwned = bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(CACHE_LIMIT)
            .deserialize_from(stream)?;

        if &cache.fingerprint != expected {
            return Err(GeoTextError::InvalidData(format!(
                "cache {} was built from a different configuration",
                path.display()
            )));
        }
        Ok(cache.geotext)
    }
}

/// Writes any serializable value to disk, optionally gzip-compressed.
fn write_generic<T: Serialize>(path: &Path, value: &T, compression: CompressionMode) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let options = bincode::DefaultOptions::new().with_fixint_encoding();

    let mut writer = match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                options.serialize_into(&mut encoder, value)?;
                encoder.finish()?
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(GeoTextError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            let mut writer = writer;
            options.serialize_into(&mut writer, value)?;
            writer
        }
    };
    writer.flush()?;
    Ok(())
}
