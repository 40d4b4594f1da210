// crates/geotext-core/src/model/result.rs
use super::lookup::LocationKind;
use crate::text::Span;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Where and how often one canonical place was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationMatch {
    pub count: usize,
    pub spans: Vec<Span>,
    /// The spellings as they appeared in the text, in order of occurrence.
    pub found_as: Vec<String>,
}

/// Matches of one [`LocationKind`], keyed by canonical name.
///
/// Keys are unique and kept in order of first occurrence in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationBucket {
    entries: Vec<(String, LocationMatch)>,
    index: HashMap<String, usize>,
}

impl LocationBucket {
    /// Record one occurrence of `name`.
    pub fn record(&mut self, name: &str, span: Span, found_as: &str) {
        match self.index.get(name) {
            Some(&i) => {
                let m = &mut self.entries[i].1;
                m.count += 1;
                m.spans.push(span);
                m.found_as.push(found_as.to_string());
            }
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((
                    name.to_string(),
                    LocationMatch {
                        count: 1,
                        spans: vec![span],
                        found_as: vec![found_as.to_string()],
                    },
                ));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&LocationMatch> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Canonical names in order of first occurrence.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocationMatch)> {
        self.entries.iter().map(|(n, m)| (n.as_str(), m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LocationBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, m) in &self.entries {
            map.serialize_entry(name, m)?;
        }
        map.end()
    }
}

/// Output of one extraction run, bucketed by location kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub countries: LocationBucket,
    pub cities: LocationBucket,
}

impl ExtractionResult {
    pub fn bucket(&self, kind: LocationKind) -> &LocationBucket {
        match kind {
            LocationKind::Country => &self.countries,
            LocationKind::City => &self.cities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.cities.is_empty()
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ExtractionResult", 2)?;
        s.serialize_field(LocationKind::City.bucket(), &self.cities)?;
        s.serialize_field(LocationKind::Country.bucket(), &self.countries)?;
        s.end()
    }
}
