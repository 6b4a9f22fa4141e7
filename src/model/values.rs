use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::profile::Sex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClinicalParameter {
    #[serde(rename = "sbp")]
    Sbp,
    #[serde(rename = "tchol")]
    TotalCholesterol,
    #[serde(rename = "hdl")]
    Hdl,
    #[serde(rename = "hba1c")]
    Hba1c,
    #[serde(rename = "scr")]
    SerumCreatinine,
}

impl ClinicalParameter {
    pub fn id(self) -> &'static str {
        match self {
            ClinicalParameter::Sbp => "sbp",
            ClinicalParameter::TotalCholesterol => "tchol",
            ClinicalParameter::Hdl => "hdl",
            ClinicalParameter::Hba1c => "hba1c",
            ClinicalParameter::SerumCreatinine => "scr",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ClinicalParameter::Sbp => "mmHg",
            ClinicalParameter::TotalCholesterol | ClinicalParameter::Hdl => "mmol/L",
            ClinicalParameter::Hba1c => "mmol/mol",
            ClinicalParameter::SerumCreatinine => "mg/dL",
        }
    }
}

impl fmt::Display for ClinicalParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Values only collected for diabetic patients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiabetesValues {
    pub age_at_diabetes_diagnosis: u32,
    pub hba1c: f64,
    pub scr: f64,
}

/// Uniform numeric inputs for the risk models, whether measured or estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalValues {
    pub age: u32,
    pub sex: Sex,
    pub is_smoker: bool,
    pub has_diabetes: bool,
    pub sbp: f64,
    pub tchol: f64,
    pub hdl: f64,
    #[serde(flatten)]
    pub diabetes: Option<DiabetesValues>,
}

impl ClinicalValues {
    pub fn value_of(&self, parameter: ClinicalParameter) -> Option<f64> {
        match parameter {
            ClinicalParameter::Sbp => Some(self.sbp),
            ClinicalParameter::TotalCholesterol => Some(self.tchol),
            ClinicalParameter::Hdl => Some(self.hdl),
            ClinicalParameter::Hba1c => self.diabetes.map(|d| d.hba1c),
            ClinicalParameter::SerumCreatinine => self.diabetes.map(|d| d.scr),
        }
    }
}
