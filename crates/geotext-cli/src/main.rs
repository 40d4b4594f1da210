//! geotext: command-line interface for geotext-core
//!
//! Usage examples
//! --------------
//!
//! - Countries mentioned in a sentence
//!   $ geotext countries "I visited France and Germany last year"
//!
//! - Same, reading stdin
//!   $ cat article.txt | geotext countries
//!
//! - Every match (countries and cities) with spans, as JSON
//!   $ geotext extract --json "Flights from Madrid, Spain to Lima, Peru"
//!
//! - Gazetteer summary, with an extra lookup file merged in
//!   $ geotext --countries extra.json stats
//!
//! - Precompile the gazetteer for faster start-up
//!   $ geotext build ./geotext.bin
//!   $ geotext --cache ./geotext.bin countries "..."
//!
//! Set `RUST_LOG` or pass `-v` for loader diagnostics.
use anyhow::Context;
use clap::Parser;
use geotext_cli::args::{CliArgs, Commands};
use geotext_cli::input::read_input;
use geotext_core::{extract_countries_from_bytes, text_from_bytes, CacheFingerprint, GeoText};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if args.verbose || has_rust_log {
        let filter = if args.verbose {
            EnvFilter::from_default_env().add_directive("geotext_core=debug".parse()?)
        } else {
            EnvFilter::from_default_env()
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    let config = args.config();
    tracing::debug!(?config, "configuration resolved");
    let geotext = GeoText::from_config(&config).context("failed to load gazetteer")?;

    match args.command {
        Commands::Countries { text } | Commands::Regions { text } => {
            let input = read_input(text, std::io::stdin())?;
            for name in extract_countries_from_bytes(&geotext, &input)? {
                println!("{name}");
            }
        }

        Commands::Extract { text, json } => {
            let input = read_input(text, std::io::stdin())?;
            let result = geotext.extract(text_from_bytes(&input)?);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_empty() {
                println!("No locations found.");
            } else {
                for (label, bucket) in [("Countries", &result.countries), ("Cities", &result.cities)] {
                    if bucket.is_empty() {
                        continue;
                    }
                    println!("{label}:");
                    for (name, m) in bucket.iter() {
                        let found: Vec<String> = m
                            .spans
                            .iter()
                            .zip(&m.found_as)
                            .map(|(s, f)| format!("{f}@{}..{}", s.start, s.end))
                            .collect();
                        println!("  {name} x{}: {}", m.count, found.join(", "));
                    }
                }
            }
        }

        Commands::Stats => {
            let stats = geotext.stats();
            println!("Gazetteer statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
            println!("  Spellings: {}", stats.keywords);
        }

        Commands::Build { out } => {
            geotext
                .save_as(&out, &CacheFingerprint::from_config(&config))
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}
