//! SCORE2-family 10-year cardiovascular risk engine.
//!
//! `compute_risk` takes a caller's answer set and demographic profile,
//! resolves measured or proxy-estimated clinical values, selects SCORE2,
//! SCORE2-OP or SCORE2-Diabetes, and returns the region-calibrated risk.
//! The engine itself performs no I/O; `input` and `report` serve the CLI.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod proxy;
pub mod report;

pub use error::EngineError;
pub use model::{ClinicalProfile, ClinicalValues, RawAnswerSet, RiskModel, RiskRegion, RiskResult, Sex};
pub use pipeline::{compute_risk, compute_risk_with};
