use crate::model::profile::RiskRegion;
use crate::model::regions::{DEFAULT_REGION, RegionMap};

/// Looks the country up case- and whitespace-insensitively. Unlisted
/// countries get the `high` region instead of an error.
pub fn resolve_region(country: &str, map: &RegionMap) -> RiskRegion {
    match map.lookup(country) {
        Some(region) => region,
        None => {
            tracing::warn!(
                country,
                fallback = %DEFAULT_REGION,
                "country not found in region mapping; using default region"
            );
            DEFAULT_REGION
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_region.rs"]
mod tests;
