use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a compiled extractor.
///
/// Returned by [`GeoText::stats`](crate::GeoText::stats); `keywords` counts
/// every registered spelling (canonical names included) across both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub countries: usize,
    pub cities: usize,
    pub keywords: usize,
}
