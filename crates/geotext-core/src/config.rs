// crates/geotext-core/src/config.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_BUILTIN: &str = "GEOTEXT_BUILTIN";
pub const ENV_COUNTRIES: &str = "GEOTEXT_COUNTRIES";
pub const ENV_CITIES: &str = "GEOTEXT_CITIES";
pub const ENV_CACHE: &str = "GEOTEXT_CACHE";

/// Where the extractor gets its gazetteer from.
///
/// The default uses the built-in demo data only. Custom lookup files are
/// merged on top of it (or used alone with `use_builtin_data = false`).
/// When `cache_path` is set, the compiled extractor is read from / written to
/// that bincode file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoTextConfig {
    pub use_builtin_data: bool,
    pub countries_path: Option<PathBuf>,
    pub cities_path: Option<PathBuf>,
    pub cache_path: Option<PathBuf>,
}

impl Default for GeoTextConfig {
    fn default() -> Self {
        Self {
            use_builtin_data: true,
            countries_path: None,
            cities_path: None,
            cache_path: None,
        }
    }
}

impl GeoTextConfig {
    /// Read `GEOTEXT_BUILTIN`, `GEOTEXT_COUNTRIES`, `GEOTEXT_CITIES` and
    /// `GEOTEXT_CACHE`; unset variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        let use_builtin_data = get(ENV_BUILTIN)
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Self {
            use_builtin_data,
            countries_path: path(ENV_COUNTRIES),
            cities_path: path(ENV_CITIES),
            cache_path: path(ENV_CACHE),
        }
    }

    pub fn with_builtin_data(mut self, enabled: bool) -> Self {
        self.use_builtin_data = enabled;
        self
    }

    pub fn with_countries(mut self, path: impl Into<PathBuf>) -> Self {
        self.countries_path = Some(path.into());
        self
    }

    pub fn with_cities(mut self, path: impl Into<PathBuf>) -> Self {
        self.cities_path = Some(path.into());
        self
    }

    pub fn with_cache(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Lookup files this configuration reads, in load order.
    pub fn source_paths(&self) -> Vec<&PathBuf> {
        self.countries_path
            .iter()
            .chain(self.cities_path.iter())
            .collect()
    }
}
