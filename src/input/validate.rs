//! Request-level validation: the checks the engine assumes were already made.

use crate::input::InputError;
use crate::model::answers::{InputMode, ParameterAnswer, RawAnswerSet};
use crate::model::profile::ClinicalProfile;
use crate::model::values::ClinicalParameter;

/// Accepted manual value range per parameter, inclusive.
pub fn manual_range(parameter: ClinicalParameter) -> (f64, f64) {
    match parameter {
        ClinicalParameter::Sbp => (50.0, 300.0),
        ClinicalParameter::TotalCholesterol => (1.0, 20.0),
        ClinicalParameter::Hdl => (0.1, 5.0),
        ClinicalParameter::Hba1c => (20.0, 200.0),
        ClinicalParameter::SerumCreatinine => (0.1, 15.0),
    }
}

/// Collects every problem instead of stopping at the first.
pub fn validate_request(
    answers: &RawAnswerSet,
    profile: &ClinicalProfile,
) -> Result<(), InputError> {
    let mut problems = Vec::new();

    check_parameter(ClinicalParameter::Sbp, &answers.sbp, &mut problems);
    check_parameter(ClinicalParameter::TotalCholesterol, &answers.tchol, &mut problems);
    check_parameter(ClinicalParameter::Hdl, &answers.hdl, &mut problems);

    if answers.has_diabetes {
        match answers.age_at_diabetes_diagnosis {
            None => problems.push("age_at_diabetes_diagnosis is required".to_string()),
            Some(age) if age < 1 || age > profile.age => problems.push(format!(
                "age_at_diabetes_diagnosis must be between 1 and {} (got {age})",
                profile.age
            )),
            Some(_) => {}
        }
        match &answers.hba1c {
            Some(answer) => check_parameter(ClinicalParameter::Hba1c, answer, &mut problems),
            None => problems.push("hba1c is required".to_string()),
        }
        match &answers.scr {
            Some(answer) => {
                check_parameter(ClinicalParameter::SerumCreatinine, answer, &mut problems)
            }
            None => problems.push("scr is required".to_string()),
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(InputError::Validation(problems))
    }
}

fn check_parameter<P>(
    parameter: ClinicalParameter,
    answer: &ParameterAnswer<P>,
    problems: &mut Vec<String>,
) {
    match answer.input_type {
        InputMode::Manual => match answer.value {
            None => problems.push(format!("{parameter}.value is required for manual input")),
            Some(value) => {
                let (min, max) = manual_range(parameter);
                if !(min..=max).contains(&value) {
                    problems.push(format!(
                        "{parameter}.value must be between {min} and {max} {} (got {value})",
                        parameter.unit()
                    ));
                }
            }
        },
        InputMode::Proxy => {
            if answer.proxy_answers.is_none() {
                problems.push(format!(
                    "{parameter}.proxy_answers is required for proxy input"
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/validate.rs"]
mod tests;
