use crate::model::values::ClinicalParameter;

/// Precondition violations raised by the engine. The request-validation layer
/// is expected to reject these inputs before they reach `compute_risk`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{0} is marked manual but no value was supplied")]
    MissingManualValue(ClinicalParameter),

    #[error("{0} is marked proxy but no proxy answers were supplied")]
    MissingProxyAnswers(ClinicalParameter),

    #[error("{0} is required for diabetic patients")]
    MissingParameter(ClinicalParameter),

    #[error("age at diabetes diagnosis is required for diabetic patients")]
    MissingDiagnosisAge,
}
