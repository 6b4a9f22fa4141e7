use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::de::DeserializeOwned;

use crate::model::answers::RawAnswerSet;
use crate::model::profile::RiskRegion;
use crate::model::regions::{RegionMap, normalize_country};

pub mod batch;
pub mod profile;
pub mod validate;

pub use profile::ProfileInput;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Opens a file for line reading, decompressing it when the name ends in `.gz`.
pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let reader = open_maybe_gz(path)?;
    let value = serde_json::from_reader(reader)?;
    Ok(value)
}

pub fn load_answers(path: &Path) -> Result<RawAnswerSet, InputError> {
    let answers: RawAnswerSet = load_json(path)?;
    tracing::debug!(path = %path.display(), "loaded answer set");
    Ok(answers)
}

pub fn load_profile(path: &Path) -> Result<ProfileInput, InputError> {
    load_json(path)
}

pub fn load_region_map(path: &Path) -> Result<RegionMap, InputError> {
    let lists: BTreeMap<RiskRegion, Vec<String>> = load_json(path)?;
    let map = build_region_map(lists)?;
    tracing::info!(path = %path.display(), "loaded region mapping override");
    Ok(map)
}

pub fn parse_region_map(json: &str) -> Result<RegionMap, InputError> {
    let lists: BTreeMap<RiskRegion, Vec<String>> = serde_json::from_str(json)?;
    build_region_map(lists)
}

fn build_region_map(lists: BTreeMap<RiskRegion, Vec<String>>) -> Result<RegionMap, InputError> {
    let mut seen: BTreeMap<String, RiskRegion> = BTreeMap::new();
    for (region, countries) in &lists {
        for country in countries {
            let key = normalize_country(country);
            if key.is_empty() {
                return Err(InputError::InvalidInput(format!(
                    "empty country name in region {region}"
                )));
            }
            if let Some(previous) = seen.insert(key.clone(), *region) {
                if previous != *region {
                    return Err(InputError::InvalidInput(format!(
                        "country '{key}' is listed in both {previous} and {region}"
                    )));
                }
            }
        }
    }
    Ok(RegionMap::from_entries(lists))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
