//! geotext-cli
//! ===========
//!
//! Command-line interface for the `geotext-core` location extractor.
//!
//! This crate primarily provides a binary (`geotext`). The library target
//! carries the argument definitions so they can be tested and so docs.rs
//! renders an overview page.
//!
//! Basic usage:
//!
//! ```text
//! geotext countries "I visited France and Germany last year"
//! echo "Flights from Madrid to Lima" | geotext extract --json
//! geotext --countries extra.json stats
//! geotext build ./geotext.bin
//! ```
//!
//! For programmatic access use the [`geotext-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod input;
