use crate::error::EngineError;
use crate::model::answers::{InputMode, ParameterAnswer, RawAnswerSet};
use crate::model::profile::ClinicalProfile;
use crate::model::values::{ClinicalParameter, ClinicalValues, DiabetesValues};
use crate::proxy::{estimate_hba1c, estimate_hdl, estimate_sbp, estimate_scr, estimate_tchol};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedValues {
    pub values: ClinicalValues,
    pub estimated: Vec<ClinicalParameter>,
}

pub fn resolve_clinical_values(
    answers: &RawAnswerSet,
    profile: &ClinicalProfile,
) -> Result<ResolvedValues, EngineError> {
    let smoking = answers.smoking_status;
    let mut estimated = Vec::new();

    let sbp = resolve_parameter(ClinicalParameter::Sbp, &answers.sbp, &mut estimated, |p| {
        estimate_sbp(p, profile, smoking)
    })?;
    let tchol = resolve_parameter(
        ClinicalParameter::TotalCholesterol,
        &answers.tchol,
        &mut estimated,
        |p| estimate_tchol(p, smoking),
    )?;
    let hdl = resolve_parameter(ClinicalParameter::Hdl, &answers.hdl, &mut estimated, |p| {
        estimate_hdl(p, profile, smoking)
    })?;

    let diabetes = if answers.has_diabetes {
        let age_at_diabetes_diagnosis = answers
            .age_at_diabetes_diagnosis
            .ok_or(EngineError::MissingDiagnosisAge)?;
        let hba1c_answer = answers
            .hba1c
            .as_ref()
            .ok_or(EngineError::MissingParameter(ClinicalParameter::Hba1c))?;
        let scr_answer = answers
            .scr
            .as_ref()
            .ok_or(EngineError::MissingParameter(ClinicalParameter::SerumCreatinine))?;

        let hba1c = resolve_parameter(
            ClinicalParameter::Hba1c,
            hba1c_answer,
            &mut estimated,
            estimate_hba1c,
        )?;
        let scr = resolve_parameter(
            ClinicalParameter::SerumCreatinine,
            scr_answer,
            &mut estimated,
            |p| estimate_scr(p, profile, smoking),
        )?;

        Some(DiabetesValues {
            age_at_diabetes_diagnosis,
            hba1c,
            scr,
        })
    } else {
        None
    };

    let values = ClinicalValues {
        age: profile.age,
        sex: profile.sex,
        is_smoker: smoking.is_active(),
        has_diabetes: answers.has_diabetes,
        sbp,
        tchol,
        hdl,
        diabetes,
    };

    tracing::debug!(
        age = values.age,
        sex = %values.sex,
        sbp = values.sbp,
        tchol = values.tchol,
        hdl = values.hdl,
        estimated = ?estimated,
        "resolved clinical values"
    );

    Ok(ResolvedValues { values, estimated })
}

fn resolve_parameter<P>(
    parameter: ClinicalParameter,
    answer: &ParameterAnswer<P>,
    estimated: &mut Vec<ClinicalParameter>,
    estimate: impl FnOnce(&P) -> f64,
) -> Result<f64, EngineError> {
    match answer.input_type {
        InputMode::Manual => answer
            .value
            .ok_or(EngineError::MissingManualValue(parameter)),
        InputMode::Proxy => {
            let proxy = answer
                .proxy_answers
                .as_ref()
                .ok_or(EngineError::MissingProxyAnswers(parameter))?;
            estimated.push(parameter);
            Ok(estimate(proxy))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_values.rs"]
mod tests;
