use clap::{Parser, Subcommand};
use geotext_core::GeoTextConfig;
use std::path::PathBuf;

/// CLI arguments for geotext
#[derive(Debug, Parser)]
#[command(
    name = "geotext",
    version,
    about = "Extract country and city names from free text"
)]
pub struct CliArgs {
    /// Extra country lookup file ({name: [synonyms]}, .json or .json.gz)
    #[arg(long = "countries", global = true)]
    pub countries: Option<PathBuf>,

    /// Extra city lookup file ({name: [synonyms]}, .json or .json.gz)
    #[arg(long = "cities", global = true)]
    pub cities: Option<PathBuf>,

    /// Do not load the built-in gazetteer
    #[arg(long = "no-builtin", global = true)]
    pub no_builtin: bool,

    /// Read/write the compiled extractor from/to this cache file
    #[arg(long = "cache", global = true)]
    pub cache: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    /// Extractor configuration from the environment, overridden by flags.
    pub fn config(&self) -> GeoTextConfig {
        let mut config = GeoTextConfig::from_env();
        if self.no_builtin {
            config.use_builtin_data = false;
        }
        if let Some(p) = &self.countries {
            config.countries_path = Some(p.clone());
        }
        if let Some(p) = &self.cities {
            config.cities_path = Some(p.clone());
        }
        if let Some(p) = &self.cache {
            config.cache_path = Some(p.clone());
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the distinct countries mentioned in TEXT (or stdin)
    Countries {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },

    /// Same as `countries`
    Regions {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },

    /// Show every country and city match with spans
    Extract {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a summary of the loaded gazetteer
    Stats,

    /// Compile the gazetteer and write it as a binary cache
    Build {
        /// Output path of the cache file
        out: PathBuf,
    },
}
