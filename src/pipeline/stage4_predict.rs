use crate::error::EngineError;
use crate::model::coefficients::{
    SCORE2, SCORE2_DIABETES, SCORE2_OP, Score2Coefficients, Score2DiabetesCoefficients,
    Score2OpCoefficients,
};
use crate::model::profile::Sex;
use crate::model::result::RiskModel;
use crate::model::values::{ClinicalParameter, ClinicalValues, DiabetesValues};

const EGFR_FLOOR: f64 = 0.1;

/// Weighted sum of transformed risk factors, with each term kept for audit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearPredictor {
    pub value: f64,
    pub terms: Vec<(&'static str, f64)>,
}

impl LinearPredictor {
    fn term(&mut self, name: &'static str, coefficient: f64, x: f64) {
        let contribution = coefficient * x;
        self.value += contribution;
        self.terms.push((name, contribution));
    }

    fn interaction(&mut self, name: &'static str, coefficient: f64, x: f64, cage: f64) {
        let contribution = coefficient * x * cage;
        self.value += contribution;
        self.terms.push((name, contribution));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    pub model: RiskModel,
    pub linear_predictor: LinearPredictor,
    pub uncalibrated_risk: f64,
    pub egfr: Option<f64>,
}

/// 2021 CKD-EPI creatinine equation without race term.
pub fn calculate_egfr(scr: f64, age: u32, sex: Sex) -> f64 {
    let (a, b) = match sex {
        Sex::Female => (0.7, if scr <= 0.7 { -0.241 } else { -1.2 }),
        Sex::Male => (0.9, if scr <= 0.9 { -0.302 } else { -1.2 }),
    };

    let mut egfr = 142.0 * (scr / a).powf(b) * 0.9938f64.powi(age as i32);
    if sex == Sex::Female {
        egfr *= 1.012;
    }

    egfr.max(EGFR_FLOOR)
}

pub fn run_model(model: RiskModel, values: &ClinicalValues) -> Result<ModelOutput, EngineError> {
    let output = match model {
        RiskModel::Score2 => {
            let lp = score2_linear_predictor(values, SCORE2.coefficients.get(values.sex));
            let s0 = *SCORE2.baseline_survival.get(values.sex);
            ModelOutput {
                model,
                uncalibrated_risk: survival_risk(s0, lp.value),
                linear_predictor: lp,
                egfr: None,
            }
        }
        RiskModel::Score2Op => {
            let lp = score2_op_linear_predictor(values, SCORE2_OP.coefficients.get(values.sex));
            let s0 = *SCORE2_OP.baseline_survival.get(values.sex);
            let mean_lp = *SCORE2_OP.mean_linear_predictor.get(values.sex);
            ModelOutput {
                model,
                uncalibrated_risk: survival_risk(s0, lp.value - mean_lp),
                linear_predictor: lp,
                egfr: None,
            }
        }
        RiskModel::Score2Diabetes => {
            let diabetes = values
                .diabetes
                .ok_or(EngineError::MissingParameter(ClinicalParameter::SerumCreatinine))?;
            let egfr = calculate_egfr(diabetes.scr, values.age, values.sex);
            let lp = score2_diabetes_linear_predictor(
                values,
                &diabetes,
                egfr,
                SCORE2_DIABETES.coefficients.get(values.sex),
            );
            let s0 = *SCORE2_DIABETES.baseline_survival.get(values.sex);
            ModelOutput {
                model,
                uncalibrated_risk: survival_risk(s0, lp.value),
                linear_predictor: lp,
                egfr: Some(egfr),
            }
        }
    };

    tracing::debug!(
        model = output.model.id(),
        linear_predictor = output.linear_predictor.value,
        uncalibrated_risk = output.uncalibrated_risk,
        egfr = ?output.egfr,
        "evaluated risk model"
    );
    tracing::trace!(terms = ?output.linear_predictor.terms, "linear predictor terms");

    Ok(output)
}

/// `1 - S0^exp(x)`.
pub fn survival_risk(baseline_survival: f64, x: f64) -> f64 {
    1.0 - baseline_survival.powf(x.exp())
}

fn smoking_indicator(values: &ClinicalValues) -> f64 {
    if values.is_smoker { 1.0 } else { 0.0 }
}

pub fn score2_linear_predictor(values: &ClinicalValues, coef: &Score2Coefficients) -> LinearPredictor {
    let cage = (f64::from(values.age) - 60.0) / 5.0;
    let csbp = (values.sbp - 120.0) / 20.0;
    let ctchol = values.tchol - 6.0;
    let chdl = (values.hdl - 1.3) / 0.5;
    let smoking = smoking_indicator(values);

    let mut lp = LinearPredictor::default();
    lp.term("age", coef.age, cage);
    lp.term("smoking", coef.smoking, smoking);
    lp.term("sbp", coef.sbp, csbp);
    lp.term("tchol", coef.tchol, ctchol);
    lp.term("hdl", coef.hdl, chdl);
    lp.interaction("smoking_age", coef.smoking_age, smoking, cage);
    lp.interaction("sbp_age", coef.sbp_age, csbp, cage);
    lp.interaction("tchol_age", coef.tchol_age, ctchol, cage);
    lp.interaction("hdl_age", coef.hdl_age, chdl, cage);
    lp
}

/// Age is centred at 73 without scaling. The diabetes indicator is always 0
/// here because diabetic patients are routed to SCORE2-Diabetes.
pub fn score2_op_linear_predictor(
    values: &ClinicalValues,
    coef: &Score2OpCoefficients,
) -> LinearPredictor {
    let cage = f64::from(values.age) - 73.0;
    let csbp = values.sbp - 150.0;
    let ctchol = values.tchol - 6.0;
    let chdl = values.hdl - 1.4;
    let smoking = smoking_indicator(values);
    let diabetes = if values.has_diabetes { 1.0 } else { 0.0 };

    let mut lp = LinearPredictor::default();
    lp.term("age", coef.age, cage);
    lp.term("diabetes", coef.diabetes, diabetes);
    lp.term("smoking", coef.smoking, smoking);
    lp.term("sbp", coef.sbp, csbp);
    lp.term("tchol", coef.tchol, ctchol);
    lp.term("hdl", coef.hdl, chdl);
    lp.interaction("diabetes_age", coef.diabetes_age, diabetes, cage);
    lp.interaction("smoking_age", coef.smoking_age, smoking, cage);
    lp.interaction("sbp_age", coef.sbp_age, csbp, cage);
    lp.interaction("tchol_age", coef.tchol_age, ctchol, cage);
    lp.interaction("hdl_age", coef.hdl_age, chdl, cage);
    lp
}

pub fn score2_diabetes_linear_predictor(
    values: &ClinicalValues,
    diabetes_values: &DiabetesValues,
    egfr: f64,
    coef: &Score2DiabetesCoefficients,
) -> LinearPredictor {
    let cage = (f64::from(values.age) - 60.0) / 5.0;
    let csbp = (values.sbp - 120.0) / 20.0;
    let ctchol = values.tchol - 6.0;
    let chdl = (values.hdl - 1.3) / 0.5;
    let smoking = smoking_indicator(values);
    let diabetes = 1.0;
    let cagediab = (f64::from(diabetes_values.age_at_diabetes_diagnosis) - 50.0) / 5.0;
    let ca1c = (diabetes_values.hba1c - 31.0) / 9.34;
    let cegfr = (egfr.ln() - 4.5) / 0.15;

    let mut lp = LinearPredictor::default();
    lp.term("age", coef.age, cage);
    lp.term("smoking", coef.smoking, smoking);
    lp.term("sbp", coef.sbp, csbp);
    lp.term("diabetes", coef.diabetes, diabetes);
    lp.term("tchol", coef.tchol, ctchol);
    lp.term("hdl", coef.hdl, chdl);
    lp.interaction("smoking_age", coef.smoking_age, smoking, cage);
    lp.interaction("sbp_age", coef.sbp_age, csbp, cage);
    lp.interaction("diabetes_age", coef.diabetes_age, diabetes, cage);
    lp.interaction("tchol_age", coef.tchol_age, ctchol, cage);
    lp.interaction("hdl_age", coef.hdl_age, chdl, cage);
    lp.term(
        "age_at_diabetes_diagnosis",
        coef.age_at_diabetes_diagnosis,
        cagediab,
    );
    lp.term("hba1c", coef.hba1c, ca1c);
    lp.term("egfr", coef.egfr, cegfr);
    lp.term("egfr2", coef.egfr2, cegfr.powi(2));
    lp.interaction("hba1c_age", coef.hba1c_age, ca1c, cage);
    lp.interaction("egfr_age", coef.egfr_age, cegfr, cage);
    lp
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_predict.rs"]
mod tests;
