use crate::model::answers::{ExerciseType, FishIntake, HdlProxyAnswers, SmokingStatus};
use crate::model::profile::{ClinicalProfile, Sex};
use crate::proxy::round_to;

/// HDL cholesterol estimate in mmol/L. An unanswered exercise question counts
/// as sedentary.
pub fn estimate_hdl(
    answers: &HdlProxyAnswers,
    profile: &ClinicalProfile,
    smoking: SmokingStatus,
) -> f64 {
    let mut hdl = match profile.sex {
        Sex::Female => 1.3,
        Sex::Male => 1.1,
    };

    hdl += match answers.exercise_type {
        Some(ExerciseType::ResistanceOrHiit) => 0.3,
        Some(ExerciseType::LightRoutine) => 0.1,
        Some(ExerciseType::AlmostNever) | None => -0.2,
    };

    if smoking.is_active() {
        hdl -= 0.25;
    }

    if answers.fish_intake == Some(FishIntake::TwiceWeeklyOrMore) {
        hdl += 0.15;
    }

    round_to(hdl, 2)
}

#[cfg(test)]
#[path = "../../tests/src_inline/proxy/hdl.rs"]
mod tests;
