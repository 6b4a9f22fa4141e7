pub mod answers;
pub mod coefficients;
pub mod profile;
pub mod regions;
pub mod result;
pub mod values;

pub use answers::{InputMode, ParameterAnswer, RawAnswerSet, SmokingStatus};
pub use profile::{ClinicalProfile, RiskRegion, Sex};
pub use regions::RegionMap;
pub use result::{RiskModel, RiskResult};
pub use values::{ClinicalParameter, ClinicalValues, DiabetesValues};
