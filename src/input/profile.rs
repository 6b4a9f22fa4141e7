use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::input::InputError;
use crate::model::profile::{ClinicalProfile, Sex};

/// Demographic profile as supplied by the caller. Either `age` or
/// `date_of_birth` must be present; the date wins when both are given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Sex,
    pub country_of_residence: String,
}

impl ProfileInput {
    pub fn into_profile(self, as_of: NaiveDate) -> Result<ClinicalProfile, InputError> {
        let age = match (self.date_of_birth, self.age) {
            (Some(dob), stated) => {
                let age = age_on(dob, as_of).ok_or_else(|| {
                    InputError::InvalidInput(format!(
                        "date_of_birth {dob} is after the reference date {as_of}"
                    ))
                })?;
                if let Some(stated) = stated.filter(|&s| s != age) {
                    tracing::warn!(
                        stated,
                        derived = age,
                        "stated age differs from date_of_birth; using date_of_birth"
                    );
                }
                age
            }
            (None, Some(age)) => age,
            (None, None) => {
                return Err(InputError::MissingInput(
                    "profile needs either age or date_of_birth".to_string(),
                ));
            }
        };

        Ok(ClinicalProfile {
            age,
            sex: self.sex,
            country_of_residence: self.country_of_residence,
        })
    }
}

/// Completed years between `date_of_birth` and `as_of`, or `None` if the
/// birth date lies in the future.
pub fn age_on(date_of_birth: NaiveDate, as_of: NaiveDate) -> Option<u32> {
    as_of.years_since(date_of_birth)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/profile.rs"]
mod tests;
