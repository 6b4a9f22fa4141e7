//! Caller-facing answer set: per-parameter input mode plus either a measured
//! value or the categorical proxy answers used to estimate it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    Manual,
    Proxy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    ActiveSmoker,
    NotCurrentlySmoking,
}

impl SmokingStatus {
    pub fn is_active(self) -> bool {
        self == SmokingStatus::ActiveSmoker
    }
}

/// One clinical parameter as supplied by the caller. `value` is expected iff
/// `input_type` is manual, `proxy_answers` iff it is proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterAnswer<P> {
    pub input_type: InputMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_answers: Option<P>,
}

impl<P> ParameterAnswer<P> {
    pub fn manual(value: f64) -> Self {
        Self {
            input_type: InputMode::Manual,
            value: Some(value),
            proxy_answers: None,
        }
    }

    pub fn proxy(answers: P) -> Self {
        Self {
            input_type: InputMode::Proxy,
            value: None,
            proxy_answers: Some(answers),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnswerSet {
    pub has_diabetes: bool,
    pub smoking_status: SmokingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_at_diabetes_diagnosis: Option<u32>,
    pub sbp: ParameterAnswer<SbpProxyAnswers>,
    pub tchol: ParameterAnswer<TcholProxyAnswers>,
    pub hdl: ParameterAnswer<HdlProxyAnswers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hba1c: Option<ParameterAnswer<Hba1cProxyAnswers>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scr: Option<ParameterAnswer<ScrProxyAnswers>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepPattern {
    Restful,
    Insomnia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressResponse {
    Calm,
    PalpitationsAndFlushing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    SlimOrIdeal,
    AbdominalObesity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFrequency {
    Rarely,
    RegularLight,
    RegularIntense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    AlmostNever,
    LightRoutine,
    ResistanceOrHiit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingOil {
    PalmOrBulk,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FishIntake {
    Rarely,
    TwiceWeeklyOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    VeryMuscular,
    Athletic,
    Average,
    Lean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesControl {
    WellControlled,
    PoorlyControlled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NsaidUse {
    Rarely,
    Frequently,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoamyUrine {
    Never,
    Occasionally,
    Frequently,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlucoseMonitoring {
    Never,
    UsuallyOnTarget,
    UsuallyAboveTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentAdherence {
    DisciplinedOnBoth,
    DietLapses,
    MedicationLapses,
    UndisciplinedOnBoth,
}

/// Unanswered questions are `None`; each estimator decides what that means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SbpProxyAnswers {
    pub family_hypertension: Option<bool>,
    pub sleep_pattern: Option<SleepPattern>,
    pub salt_diet: Vec<String>,
    pub stress_response: Option<StressResponse>,
    pub body_shape: Option<BodyShape>,
    pub exercise: Option<ExerciseFrequency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TcholProxyAnswers {
    pub family_cholesterol_or_heart_attack: Option<bool>,
    pub cooking_oil: Option<CookingOil>,
    pub exercise_type: Option<ExerciseType>,
    pub xanthoma: Option<bool>,
    pub fish_intake: Option<FishIntake>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HdlProxyAnswers {
    pub exercise_type: Option<ExerciseType>,
    pub fish_intake: Option<FishIntake>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrProxyAnswers {
    pub body_type: Option<BodyType>,
    pub diabetes_control: Option<DiabetesControl>,
    pub retinopathy_or_neuropathy: Option<bool>,
    pub nsaid_use: Option<NsaidUse>,
    pub foamy_urine: Option<FoamyUrine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hba1cProxyAnswers {
    pub glucose_monitoring: Option<GlucoseMonitoring>,
    pub adherence: Option<TreatmentAdherence>,
    pub exercise: Option<ExerciseFrequency>,
}
