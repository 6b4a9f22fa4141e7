use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SCORE2 calibration region. Declaration order is the lookup order used by
/// the region resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRegion {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskRegion {
    pub const ALL: [RiskRegion; 4] = [
        RiskRegion::Low,
        RiskRegion::Moderate,
        RiskRegion::High,
        RiskRegion::VeryHigh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskRegion::Low => "low",
            RiskRegion::Moderate => "moderate",
            RiskRegion::High => "high",
            RiskRegion::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for RiskRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalProfile {
    pub age: u32,
    pub sex: Sex,
    pub country_of_residence: String,
}

impl ClinicalProfile {
    pub fn new(age: u32, sex: Sex, country_of_residence: impl Into<String>) -> Self {
        Self {
            age,
            sex,
            country_of_residence: country_of_residence.into(),
        }
    }
}
