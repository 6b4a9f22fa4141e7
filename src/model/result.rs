use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::profile::RiskRegion;
use crate::model::values::{ClinicalParameter, ClinicalValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskModel {
    Score2,
    Score2Op,
    Score2Diabetes,
}

impl RiskModel {
    pub fn id(self) -> &'static str {
        match self {
            RiskModel::Score2 => "score2",
            RiskModel::Score2Op => "score2_op",
            RiskModel::Score2Diabetes => "score2_diabetes",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RiskModel::Score2 => "SCORE2",
            RiskModel::Score2Op => "SCORE2-OP",
            RiskModel::Score2Diabetes => "SCORE2-Diabetes",
        }
    }
}

impl fmt::Display for RiskModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub determined_risk_region: RiskRegion,
    pub model_used: RiskModel,
    pub calibrated_10_year_risk_percent: f64,
    pub final_clinical_inputs: ClinicalValues,
    /// Parameters whose value came from a proxy estimator rather than a measurement.
    #[serde(default)]
    pub estimated_parameters: Vec<ClinicalParameter>,
}

impl RiskResult {
    pub fn is_estimated(&self, parameter: ClinicalParameter) -> bool {
        self.estimated_parameters.contains(&parameter)
    }
}
