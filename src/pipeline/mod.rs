//! Risk calculation stages, from region lookup through calibration.

pub mod stage1_region;
pub mod stage2_values;
pub mod stage3_select;
pub mod stage4_predict;
pub mod stage5_calibrate;

use crate::error::EngineError;
use crate::model::answers::RawAnswerSet;
use crate::model::profile::ClinicalProfile;
use crate::model::regions::RegionMap;
use crate::model::result::RiskResult;

use stage1_region::resolve_region;
use stage2_values::resolve_clinical_values;
use stage3_select::select_model;
use stage4_predict::run_model;
use stage5_calibrate::calibrate;

/// Computes the calibrated 10-year risk using the builtin country mapping.
pub fn compute_risk(
    answers: &RawAnswerSet,
    profile: &ClinicalProfile,
) -> Result<RiskResult, EngineError> {
    compute_risk_with(answers, profile, &RegionMap::builtin())
}

pub fn compute_risk_with(
    answers: &RawAnswerSet,
    profile: &ClinicalProfile,
    regions: &RegionMap,
) -> Result<RiskResult, EngineError> {
    let region = resolve_region(&profile.country_of_residence, regions);
    let resolved = resolve_clinical_values(answers, profile)?;
    let model = select_model(&resolved.values);
    let output = run_model(model, &resolved.values)?;
    let percent = calibrate(output.uncalibrated_risk, region, resolved.values.sex, model);

    tracing::debug!(
        region = %region,
        model = model.id(),
        risk_percent = percent,
        "computed calibrated risk"
    );

    Ok(RiskResult {
        determined_risk_region: region,
        model_used: model,
        calibrated_10_year_risk_percent: percent,
        final_clinical_inputs: resolved.values,
        estimated_parameters: resolved.estimated,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/compute.rs"]
mod tests;
