use crate::model::result::RiskResult;

pub fn render_result_json(result: &RiskResult) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(result)?;
    out.push('\n');
    Ok(out)
}
