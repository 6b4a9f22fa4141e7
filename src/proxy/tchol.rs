use crate::model::answers::{CookingOil, ExerciseType, FishIntake, SmokingStatus, TcholProxyAnswers};
use crate::proxy::round_to;

/// Total cholesterol estimate in mmol/L.
pub fn estimate_tchol(answers: &TcholProxyAnswers, smoking: SmokingStatus) -> f64 {
    let mut chol = 4.0;

    if answers.family_cholesterol_or_heart_attack == Some(true) {
        chol += 0.7;
    }
    if answers.cooking_oil == Some(CookingOil::PalmOrBulk) {
        chol += 1.2;
    }
    if answers.exercise_type == Some(ExerciseType::AlmostNever) {
        chol += 0.5;
    }
    if answers.xanthoma == Some(true) {
        chol += 3.0;
    }
    if smoking.is_active() {
        chol += 0.4;
    }

    if answers.fish_intake == Some(FishIntake::TwiceWeeklyOrMore) {
        chol -= 0.3;
    }

    round_to(chol, 2)
}

#[cfg(test)]
#[path = "../../tests/src_inline/proxy/tchol.rs"]
mod tests;
