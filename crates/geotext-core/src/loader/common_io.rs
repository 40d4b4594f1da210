// crates/geotext-core/src/loader/common_io.rs
use crate::error::{GeoTextError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Open a lookup file, transparently decompressing `*.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoTextError::NotFound(format!("Lookup file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoTextError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

/// A cache is fresh when it exists and no source file is newer.
pub fn is_cache_fresh(cache_path: &Path, sources: &[&PathBuf]) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    sources.iter().all(|src| {
        fs::metadata(src)
            .and_then(|m| m.modified())
            .map(|t| t <= cache_time)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json")).err().unwrap();
        assert!(matches!(err, GeoTextError::NotFound(_)));
    }

    #[test]
    fn reads_plain_files() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{}}").unwrap();

        let mut out = String::new();
        open_stream(file.path()).unwrap().read_to_string(&mut out).unwrap();
        assert_eq!(out, "{}");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzip_files() {
        use flate2::{write::GzEncoder, Compression};

        let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
        let mut enc = GzEncoder::new(File::create(file.path()).unwrap(), Compression::default());
        enc.write_all(br#"{"Peru": []}"#).unwrap();
        enc.finish().unwrap();

        let mut out = String::new();
        open_stream(file.path()).unwrap().read_to_string(&mut out).unwrap();
        assert_eq!(out, r#"{"Peru": []}"#);
    }

    #[test]
    fn missing_cache_is_stale() {
        assert!(!is_cache_fresh(Path::new("/nope/cache.bin"), &[]));
    }
}
