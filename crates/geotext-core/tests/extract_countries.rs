use geotext_core::{
    extract_countries, get_countries, get_regions, CacheFingerprint, GeoText, GeoTextConfig,
    GeoTextError, LocationKind,
};
use std::io::Write;
use std::thread;

fn geotext() -> GeoText {
    GeoText::builtin().expect("builtin gazetteer")
}

#[test]
fn text_without_countries_is_empty() {
    let countries = extract_countries(&geotext(), "The weather was lovely all week.").unwrap();
    assert!(countries.is_empty());
}

#[test]
fn empty_text_is_empty_not_an_error() {
    assert!(extract_countries(&geotext(), "").unwrap().is_empty());
    assert!(get_countries("").unwrap().is_empty());
}

#[test]
fn repeated_country_appears_once() {
    let countries =
        extract_countries(&geotext(), "France, France and more France. Vive la France!").unwrap();
    assert_eq!(countries, ["France"]);
}

#[test]
fn distinct_countries_in_order_of_appearance() {
    let countries =
        extract_countries(&geotext(), "I visited France and Germany last year").unwrap();
    assert_eq!(countries, ["France", "Germany"]);

    let countries =
        extract_countries(&geotext(), "From Germany to France and back to Germany").unwrap();
    assert_eq!(countries, ["Germany", "France"]);
}

#[test]
fn synonyms_and_accents_resolve_to_canonical_names() {
    let countries = extract_countries(
        &geotext(),
        "Exports from Deutschland, Côte d’Ivoire and the U.S. rose; TÜRKIYE too.",
    )
    .unwrap();
    assert_eq!(countries, ["Germany", "Ivory Coast", "United States", "Turkey"]);
}

#[test]
fn word_boundaries_and_acronym_case() {
    let countries =
        extract_countries(&geotext(), "Nigerian oil; let us talk about Omani ports").unwrap();
    assert!(countries.is_empty(), "got {countries:?}");

    let countries = extract_countries(&geotext(), "Niger and Nigeria share a border").unwrap();
    assert_eq!(countries, ["Niger", "Nigeria"]);
}

#[test]
fn longest_names_win() {
    let countries = extract_countries(
        &geotext(),
        "South Sudan split from Sudan; the Democratic Republic of the Congo neighbours Congo.",
    )
    .unwrap();
    assert_eq!(
        countries,
        [
            "South Sudan",
            "Sudan",
            "Democratic Republic of the Congo",
            "Republic of the Congo"
        ]
    );
}

#[test]
fn cities_go_to_their_own_bucket() {
    let result = geotext().extract("From Berlin to Paris, then home to Germany.");
    assert_eq!(result.cities.names().collect::<Vec<_>>(), ["Berlin", "Paris"]);
    assert_eq!(result.countries.names().collect::<Vec<_>>(), ["Germany"]);
    assert_eq!(result.bucket(LocationKind::City).len(), 2);
}

#[test]
fn regions_and_countries_agree() {
    let texts = [
        "",
        "nothing here",
        "I visited France and Germany last year",
        "Tokyo, Japan and Seoul, South Korea",
    ];
    for text in texts {
        assert_eq!(get_regions(text).unwrap(), get_countries(text).unwrap());
    }
}

#[test]
fn extraction_is_idempotent() {
    let g = geotext();
    let text = "Brazil beat Argentina, then Brazil lost to Chile.";
    let first = extract_countries(&g, text).unwrap();
    let second = extract_countries(&g, text).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, ["Brazil", "Argentina", "Chile"]);
}

#[test]
fn shared_extractor_is_built_once() {
    let a = GeoText::shared().unwrap() as *const GeoText;
    let b = GeoText::shared().unwrap() as *const GeoText;
    assert_eq!(a, b);
}

#[test]
fn concurrent_calls_agree() {
    let text = "Peace talks between Russia and Ukraine resumed in Turkey.";
    let expected = get_countries(text).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || get_countries(text).unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
    assert_eq!(expected, ["Russia", "Ukraine", "Turkey"]);
}

#[test]
fn custom_lookup_file_extends_builtin_data() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"Atlantis": ["Lost Continent"], "France": ["Gaul"]}}"#).unwrap();

    let config = GeoTextConfig::default().with_countries(file.path());
    let g = GeoText::from_config(&config).unwrap();

    let countries = extract_countries(&g, "Gaul, Atlantis and Germany").unwrap();
    assert_eq!(countries, ["France", "Atlantis", "Germany"]);
}

#[test]
fn custom_lookup_file_alone() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"Atlantis": []}}"#).unwrap();

    let config = GeoTextConfig::default()
        .with_builtin_data(false)
        .with_countries(file.path());
    let g = GeoText::from_config(&config).unwrap();

    assert_eq!(extract_countries(&g, "Atlantis and France").unwrap(), ["Atlantis"]);
    assert_eq!(g.stats().cities, 0);
}

#[test]
fn malformed_lookup_file_propagates() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "not json").unwrap();

    let config = GeoTextConfig::default().with_countries(file.path());
    assert!(matches!(
        GeoText::from_config(&config),
        Err(GeoTextError::Json(_))
    ));
}

#[test]
fn cache_round_trip_preserves_behaviour() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("geotext.bin");
    let text = "Flights from Madrid, Spain to Lima, Peru";

    let config = GeoTextConfig::default().with_cache(&cache);
    let built = GeoText::from_config(&config).unwrap();
    assert!(cache.exists());

    let cached = GeoText::from_config(&config).unwrap();
    assert_eq!(built.extract(text), cached.extract(text));
    assert_eq!(built.stats(), cached.stats());

    let loaded = GeoText::load_binary(&cache, &CacheFingerprint::from_config(&config)).unwrap();
    assert_eq!(extract_countries(&loaded, text).unwrap(), ["Spain", "Peru"]);
}

#[test]
fn unreadable_cache_falls_back_to_building() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("geotext.bin");
    std::fs::write(&cache, b"garbage").unwrap();

    let g = GeoText::from_config(&GeoTextConfig::default().with_cache(&cache)).unwrap();
    assert_eq!(extract_countries(&g, "Kenya").unwrap(), ["Kenya"]);
}

#[test]
fn cache_from_another_configuration_is_not_reused() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("geotext.bin");
    let extra = dir.path().join("extra.json");
    std::fs::write(&extra, r#"{"Atlantis": []}"#).unwrap();
    let text = "Atlantis and France";

    let with_extra = GeoTextConfig::default()
        .with_countries(&extra)
        .with_cache(&cache);
    let g = GeoText::from_config(&with_extra).unwrap();
    assert_eq!(extract_countries(&g, text).unwrap(), ["Atlantis", "France"]);

    // builtin only: Atlantis must be gone
    let builtin_only = GeoTextConfig::default().with_cache(&cache);
    let g = GeoText::from_config(&builtin_only).unwrap();
    assert_eq!(extract_countries(&g, text).unwrap(), ["France"]);

    // custom file only: France must be gone
    let bare = GeoTextConfig::default()
        .with_builtin_data(false)
        .with_countries(&extra)
        .with_cache(&cache);
    let g = GeoText::from_config(&bare).unwrap();
    assert_eq!(extract_countries(&g, text).unwrap(), ["Atlantis"]);

    // the last build was written back, so the same configuration reuses it
    let fingerprint = CacheFingerprint::from_config(&bare);
    let cached = GeoText::load_binary(&cache, &fingerprint).unwrap();
    assert_eq!(extract_countries(&cached, text).unwrap(), ["Atlantis"]);
}

#[test]
fn large_lookup_files_load() {
    let entries: Vec<String> = (0..30_000).map(|i| format!(r#""City{i}": []"#)).collect();
    let json = format!("{{{}}}", entries.join(","));

    let data = geotext_core::LookupData::from_json_str(LocationKind::City, &json).unwrap();
    assert_eq!(data.len(), 30_000);
}
