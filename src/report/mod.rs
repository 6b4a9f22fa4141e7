pub mod json;
pub mod text;

use crate::model::result::RiskResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Json,
    Text,
}

pub fn render(result: &RiskResult, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Json => json::render_result_json(result),
        ReportFormat::Text => Ok(text::render_result_text(result)),
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{v:.2}")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
