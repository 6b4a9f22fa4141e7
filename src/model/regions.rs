use crate::model::profile::RiskRegion;

#[derive(Debug, Clone, Copy)]
pub struct RegionDef {
    pub region: RiskRegion,
    pub countries: &'static [&'static str],
}

const LOW: &[&str] = &["japan", "singapore", "south korea"];
const MODERATE: &[&str] = &["sri lanka", "thailand"];
const HIGH: &[&str] = &[
    "bahrain",
    "bangladesh",
    "bhutan",
    "brunei",
    "cambodia",
    "china",
    "india",
    "iran",
    "jordan",
    "kuwait",
    "malaysia",
    "nepal",
    "qatar",
    "taiwan",
    "united arab emirates",
    "vietnam",
];
const VERY_HIGH: &[&str] = &[
    "afghanistan",
    "east timor",
    "indonesia",
    "iraq",
    "kyrgyzstan",
    "laos",
    "mongolia",
    "myanmar",
    "north korea",
    "oman",
    "pakistan",
    "philippines",
    "saudi arabia",
    "tajikistan",
    "turkmenistan",
    "uzbekistan",
    "yemen",
];

const BUILTIN_REGIONS: &[RegionDef] = &[
    RegionDef {
        region: RiskRegion::Low,
        countries: LOW,
    },
    RegionDef {
        region: RiskRegion::Moderate,
        countries: MODERATE,
    },
    RegionDef {
        region: RiskRegion::High,
        countries: HIGH,
    },
    RegionDef {
        region: RiskRegion::VeryHigh,
        countries: VERY_HIGH,
    },
];

pub fn builtin_regions() -> &'static [RegionDef] {
    BUILTIN_REGIONS
}

/// Region used when a country is not listed anywhere.
pub const DEFAULT_REGION: RiskRegion = RiskRegion::High;

/// Country lists per region, stored lower-cased and trimmed, scanned in
/// `RiskRegion` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    entries: Vec<(RiskRegion, Vec<String>)>,
}

impl RegionMap {
    pub fn builtin() -> Self {
        let entries = builtin_regions()
            .iter()
            .map(|def| {
                (
                    def.region,
                    def.countries.iter().map(|c| c.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Builds a map from arbitrary lists. Names are normalised and entries are
    /// reordered into `RiskRegion` order; overlap checks are the caller's job.
    pub fn from_entries(entries: impl IntoIterator<Item = (RiskRegion, Vec<String>)>) -> Self {
        let mut entries: Vec<(RiskRegion, Vec<String>)> = entries
            .into_iter()
            .map(|(region, countries)| {
                (
                    region,
                    countries.iter().map(|c| normalize_country(c)).collect(),
                )
            })
            .collect();
        entries.sort_by_key(|(region, _)| *region);
        Self { entries }
    }

    pub fn lookup(&self, country: &str) -> Option<RiskRegion> {
        let key = normalize_country(country);
        self.entries
            .iter()
            .find(|(_, countries)| countries.iter().any(|c| *c == key))
            .map(|(region, _)| *region)
    }

    pub fn resolve(&self, country: &str) -> RiskRegion {
        self.lookup(country).unwrap_or(DEFAULT_REGION)
    }

    pub fn countries(&self, region: RiskRegion) -> &[String] {
        self.entries
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, countries)| countries.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for RegionMap {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn normalize_country(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/regions.rs"]
mod tests;
