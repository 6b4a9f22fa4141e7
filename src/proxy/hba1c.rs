use crate::model::answers::{
    ExerciseFrequency, GlucoseMonitoring, Hba1cProxyAnswers, TreatmentAdherence,
};

const HBA1C_MIN: f64 = 42.0;
const HBA1C_MAX: f64 = 160.0;

/// HbA1c estimate in mmol/mol. Unanswered monitoring and adherence questions
/// fall back to the least favourable answers.
pub fn estimate_hba1c(answers: &Hba1cProxyAnswers) -> f64 {
    let mut hba1c: f64 = match answers.glucose_monitoring {
        Some(GlucoseMonitoring::UsuallyOnTarget) => 53.0,
        Some(GlucoseMonitoring::UsuallyAboveTarget) => 75.0,
        Some(GlucoseMonitoring::Never) | None => 65.0,
    };

    hba1c += match answers.adherence {
        Some(TreatmentAdherence::DisciplinedOnBoth) => 0.0,
        Some(TreatmentAdherence::DietLapses) => 10.0,
        Some(TreatmentAdherence::MedicationLapses) => 15.0,
        Some(TreatmentAdherence::UndisciplinedOnBoth) | None => 25.0,
    };

    if answers.exercise == Some(ExerciseFrequency::RegularIntense) {
        hba1c -= 7.0;
    }

    HBA1C_MIN.max(HBA1C_MAX.min(hba1c)).round()
}

#[cfg(test)]
#[path = "../../tests/src_inline/proxy/hba1c.rs"]
mod tests;
