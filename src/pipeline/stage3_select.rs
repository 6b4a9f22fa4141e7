use crate::model::result::RiskModel;
use crate::model::values::ClinicalValues;

pub const OLDER_POPULATION_AGE: u32 = 70;

/// Diabetes takes precedence over age.
pub fn select_model(values: &ClinicalValues) -> RiskModel {
    if values.has_diabetes {
        RiskModel::Score2Diabetes
    } else if values.age >= OLDER_POPULATION_AGE {
        RiskModel::Score2Op
    } else {
        RiskModel::Score2
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_select.rs"]
mod tests;
