use crate::model::answers::{
    BodyShape, ExerciseFrequency, SbpProxyAnswers, SleepPattern, SmokingStatus, StressResponse,
};
use crate::model::profile::{ClinicalProfile, Sex};

const SALT_ITEM_DELTA: f64 = 5.0;

/// Systolic blood pressure estimate in mmHg, rounded to a whole number.
pub fn estimate_sbp(
    answers: &SbpProxyAnswers,
    profile: &ClinicalProfile,
    smoking: SmokingStatus,
) -> f64 {
    let mut sbp = 110.0 + (f64::from(profile.age) - 25.0) * 0.45;
    if profile.sex == Sex::Male {
        sbp += 5.0;
    }

    if answers.family_hypertension == Some(true) {
        sbp += 7.0;
    }
    if answers.sleep_pattern == Some(SleepPattern::Insomnia) {
        sbp += 7.0;
    }
    sbp += answers.salt_diet.len() as f64 * SALT_ITEM_DELTA;
    if answers.stress_response == Some(StressResponse::PalpitationsAndFlushing) {
        sbp += 10.0;
    }
    if smoking.is_active() {
        sbp += 5.0;
    }
    if answers.body_shape == Some(BodyShape::AbdominalObesity) {
        sbp += 12.0;
    }

    if answers.exercise == Some(ExerciseFrequency::RegularIntense) {
        sbp -= 7.0;
    }

    sbp.round()
}

#[cfg(test)]
#[path = "../../tests/src_inline/proxy/sbp.rs"]
mod tests;
