use crate::model::coefficients::{CalibrationTable, SCORE2, SCORE2_DIABETES, SCORE2_OP};
use crate::model::profile::{RiskRegion, Sex};
use crate::model::result::RiskModel;
use crate::proxy::round_to;

pub fn calibration_table(model: RiskModel) -> &'static CalibrationTable {
    match model {
        RiskModel::Score2 => SCORE2.calibration,
        RiskModel::Score2Op => SCORE2_OP.calibration,
        RiskModel::Score2Diabetes => SCORE2_DIABETES.calibration,
    }
}

/// Complementary log-log recalibration onto regional incidence, returned as a
/// percentage rounded to two decimals. Risks outside (0, 1) short-circuit to
/// 0 or 100.
pub fn calibrate(uncalibrated_risk: f64, region: RiskRegion, sex: Sex, model: RiskModel) -> f64 {
    if uncalibrated_risk >= 1.0 {
        return 100.0;
    }
    if uncalibrated_risk <= 0.0 {
        return 0.0;
    }

    let scale = calibration_table(model).scale(region, sex);
    let cloglog = (-(1.0 - uncalibrated_risk).ln()).ln();
    let calibrated = 1.0 - (-(scale.scale1 + scale.scale2 * cloglog).exp()).exp();

    round_to(calibrated * 100.0, 2)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_calibrate.rs"]
mod tests;
