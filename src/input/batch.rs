//! JSON-lines batch scoring: one `{id, profile, answers}` record per line in,
//! one `{line, id, result | error}` record per line out.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::input::validate::validate_request;
use crate::input::{InputError, ProfileInput};
use crate::model::answers::RawAnswerSet;
use crate::model::regions::RegionMap;
use crate::model::result::RiskResult;
use crate::pipeline::compute_risk_with;

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub profile: ProfileInput,
    pub answers: RawAnswerSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RiskResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

pub fn score_record(
    record: BatchRecord,
    regions: &RegionMap,
    as_of: NaiveDate,
) -> Result<RiskResult, String> {
    let profile = record
        .profile
        .into_profile(as_of)
        .map_err(|e| e.to_string())?;
    validate_request(&record.answers, &profile).map_err(|e| e.to_string())?;
    compute_risk_with(&record.answers, &profile, regions).map_err(|e| e.to_string())
}

/// Scores every non-blank line. Per-record failures are written as error
/// outcomes; only read/write failures abort the batch.
pub fn run_batch<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    regions: &RegionMap,
    as_of: NaiveDate,
) -> Result<BatchSummary, InputError> {
    let mut summary = BatchSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match serde_json::from_str::<BatchRecord>(&line) {
            Ok(record) => {
                let id = record.id.clone();
                match score_record(record, regions, as_of) {
                    Ok(result) => BatchOutcome {
                        line: line_no,
                        id,
                        result: Some(result),
                        error: None,
                    },
                    Err(error) => BatchOutcome {
                        line: line_no,
                        id,
                        result: None,
                        error: Some(error),
                    },
                }
            }
            Err(e) => BatchOutcome {
                line: line_no,
                id: None,
                result: None,
                error: Some(format!("parse error: {e}")),
            },
        };

        summary.processed += 1;
        if let Some(error) = &outcome.error {
            summary.failed += 1;
            tracing::warn!(line = line_no, id = ?outcome.id, error = %error, "record failed");
        }

        serde_json::to_writer(&mut writer, &outcome)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    tracing::info!(
        processed = summary.processed,
        failed = summary.failed,
        "batch complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/batch.rs"]
mod tests;
