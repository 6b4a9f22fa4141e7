use crate::model::answers::{
    BodyType, DiabetesControl, FoamyUrine, NsaidUse, ScrProxyAnswers, SmokingStatus,
};
use crate::model::profile::{ClinicalProfile, Sex};
use crate::proxy::round_to;

const SCR_CEILING: f64 = 4.0;

/// Serum creatinine estimate in mg/dL, never below the muscle-mass baseline
/// and never above 4.0.
pub fn estimate_scr(
    answers: &ScrProxyAnswers,
    profile: &ClinicalProfile,
    smoking: SmokingStatus,
) -> f64 {
    let sex_base = match profile.sex {
        Sex::Female => 0.7,
        Sex::Male => 0.9,
    };
    let base = sex_base * body_type_factor(answers.body_type);

    let mut damage_points = 0.0;
    if answers.diabetes_control == Some(DiabetesControl::PoorlyControlled) {
        damage_points += 0.4;
    }
    if answers.retinopathy_or_neuropathy == Some(true) {
        damage_points += 0.3;
    }

    let mut stressor_points = 0.0;
    if smoking.is_active() {
        stressor_points += 0.1;
    }
    if answers.nsaid_use == Some(NsaidUse::Frequently) {
        stressor_points += 0.15;
    }
    if answers.foamy_urine == Some(FoamyUrine::Frequently) {
        stressor_points += 0.25;
    }

    let scr = base + damage_points + stressor_points;
    round_to(base.max(SCR_CEILING.min(scr)), 2)
}

fn body_type_factor(body_type: Option<BodyType>) -> f64 {
    match body_type {
        Some(BodyType::VeryMuscular) => 1.20,
        Some(BodyType::Athletic) => 1.10,
        Some(BodyType::Lean) => 0.90,
        Some(BodyType::Average) | None => 1.00,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/proxy/creatinine.rs"]
mod tests;
