// crates/geotext-core/src/model/lookup.rs
use crate::error::{GeoTextError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// Kind of place a lookup table (and its matches) describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Country,
    City,
}

impl LocationKind {
    /// Bucket name used in extraction results (`"countries"`, `"cities"`).
    pub fn bucket(&self) -> &'static str {
        match self {
            LocationKind::Country => "countries",
            LocationKind::City => "cities",
        }
    }
}

/// One canonical place name and the spellings that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub name: String,
    pub synonyms: Vec<String>,
}

impl LookupEntry {
    pub fn new(name: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            name: name.into(),
            synonyms,
        }
    }

    /// The canonical name followed by every synonym that differs from it.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(
            self.synonyms
                .iter()
                .map(String::as_str)
                .filter(move |s| *s != self.name),
        )
    }
}

/// A lookup table for one [`LocationKind`].
///
/// On disk this is a JSON object mapping canonical names to synonym lists:
///
/// ```json
/// { "France": ["France", "French Republic"], "Germany": ["Deutschland"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupData {
    pub kind: LocationKind,
    entries: Vec<LookupEntry>,
    /// Canonical name -> position in `entries`.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl LookupData {
    pub fn new(kind: LocationKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Parse the `{name: [synonyms]}` JSON format.
    pub fn from_json_str(kind: LocationKind, json: &str) -> Result<Self> {
        let map: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Self::from_map(kind, map)
    }

    /// Parse the `{name: [synonyms]}` JSON format from any reader.
    pub fn from_json_reader<R: Read>(kind: LocationKind, reader: R) -> Result<Self> {
        let map: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Self::from_map(kind, map)
    }

    fn from_map(kind: LocationKind, map: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut data = Self::new(kind);
        for (name, synonyms) in map {
            data.add(name, synonyms)?;
        }
        Ok(data)
    }

    /// Add a place, or extend the synonyms of an existing one.
    pub fn add(&mut self, name: impl Into<String>, synonyms: Vec<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GeoTextError::InvalidData(format!(
                "empty {} name in lookup data",
                self.kind.bucket()
            )));
        }

        // deserialized tables arrive without an index
        if self.index.len() != self.entries.len() {
            self.rebuild_index();
        }

        match self.index.get(&name) {
            Some(&i) => {
                let existing = &mut self.entries[i];
                for s in synonyms {
                    if !existing.synonyms.contains(&s) {
                        existing.synonyms.push(s);
                    }
                }
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(LookupEntry::new(name, synonyms));
            }
        }
        Ok(())
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
    }

    /// Merge `other` into `self`; entries of `other` extend existing names.
    pub fn extend(&mut self, other: LookupData) -> Result<()> {
        for entry in other.entries {
            self.add(entry.name, entry.synonyms)?;
        }
        Ok(())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[LookupEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct spellings (canonical names included).
    pub fn spelling_count(&self) -> usize {
        self.entries.iter().map(|e| e.spellings().count()).sum()
    }
}

/// Both lookup tables used by the extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gazetteer {
    pub countries: LookupData,
    pub cities: LookupData,
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self {
            countries: LookupData::new(LocationKind::Country),
            cities: LookupData::new(LocationKind::City),
        }
    }
}

impl Gazetteer {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_to_synonym_map() {
        let data = LookupData::from_json_str(
            LocationKind::Country,
            r#"{"France": ["France", "French Republic"], "Germany": ["Deutschland"]}"#,
        )
        .unwrap();

        assert_eq!(data.len(), 2);
        let france = data.entries().iter().find(|e| e.name == "France").unwrap();
        assert_eq!(
            france.spellings().collect::<Vec<_>>(),
            ["France", "French Republic"]
        );
        assert_eq!(data.spelling_count(), 4);
    }

    #[test]
    fn add_extends_existing_entry() {
        let mut data = LookupData::new(LocationKind::City);
        data.add("Munich", vec!["München".into()]).unwrap();
        data.add("Munich", vec!["München".into(), "Monaco di Baviera".into()])
            .unwrap();

        assert_eq!(data.len(), 1);
        assert_eq!(data.entries()[0].synonyms.len(), 2);
    }

    #[test]
    fn large_tables_merge_by_name() {
        let mut data = LookupData::new(LocationKind::City);
        for i in 0..30_000 {
            data.add(format!("Town {i}"), vec![]).unwrap();
        }
        for i in (0..30_000).step_by(1_000) {
            data.add(format!("Town {i}"), vec![format!("Village {i}")])
                .unwrap();
        }

        assert_eq!(data.len(), 30_000);
        assert_eq!(data.entries()[29_000].synonyms, ["Village 29000"]);
        assert_eq!(data.spelling_count(), 30_030);
    }

    #[test]
    fn deserialized_tables_still_merge() {
        let mut data = LookupData::new(LocationKind::Country);
        data.add("Peru", vec![]).unwrap();
        let json = serde_json::to_string(&data).unwrap();

        let mut back: LookupData = serde_json::from_str(&json).unwrap();
        back.add("Peru", vec!["Perú".into()]).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.entries()[0].synonyms, ["Perú"]);
    }

    #[test]
    fn rejects_empty_names() {
        let mut data = LookupData::new(LocationKind::Country);
        assert!(matches!(
            data.add("  ", vec![]),
            Err(GeoTextError::InvalidData(_))
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = LookupData::from_json_str(LocationKind::Country, "[1, 2]").unwrap_err();
        assert!(matches!(err, GeoTextError::Json(_)));
    }
}
