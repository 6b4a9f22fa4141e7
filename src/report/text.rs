use crate::model::result::RiskResult;
use crate::model::values::ClinicalParameter;
use crate::report::format_f64_2;

const PARAMETER_ORDER: &[(ClinicalParameter, &str)] = &[
    (ClinicalParameter::Sbp, "Systolic blood pressure"),
    (ClinicalParameter::TotalCholesterol, "Total cholesterol"),
    (ClinicalParameter::Hdl, "HDL cholesterol"),
    (ClinicalParameter::Hba1c, "HbA1c"),
    (ClinicalParameter::SerumCreatinine, "Serum creatinine"),
];

pub fn render_result_text(result: &RiskResult) -> String {
    let values = &result.final_clinical_inputs;
    let mut out = String::new();

    out.push_str("10-Year Cardiovascular Risk Estimate\n");
    out.push_str("====================================\n\n");

    out.push_str(&format!("Model: {}\n", result.model_used));
    out.push_str(&format!("Risk region: {}\n", result.determined_risk_region));
    out.push_str(&format!(
        "Calibrated 10-year risk: {}%\n\n",
        format_f64_2(result.calibrated_10_year_risk_percent)
    ));

    out.push_str("Profile\n");
    out.push_str(&format!("Age: {}\n", values.age));
    out.push_str(&format!("Sex: {}\n", values.sex));
    out.push_str(&format!("Smoker: {}\n", yes_no(values.is_smoker)));
    out.push_str(&format!("Diabetes: {}\n", yes_no(values.has_diabetes)));
    if let Some(diabetes) = &values.diabetes {
        out.push_str(&format!(
            "Age at diabetes diagnosis: {}\n",
            diabetes.age_at_diabetes_diagnosis
        ));
    }
    out.push('\n');

    out.push_str("Clinical inputs\n");
    for (parameter, label) in PARAMETER_ORDER {
        let Some(value) = values.value_of(*parameter) else {
            continue;
        };
        let source = if result.is_estimated(*parameter) {
            "estimated"
        } else {
            "measured"
        };
        out.push_str(&format!(
            "{label}: {} {} ({source})\n",
            format_f64_2(value),
            parameter.unit()
        ));
    }

    if !result.estimated_parameters.is_empty() {
        out.push_str(
            "\nNote: estimated values are derived from questionnaire answers; \
             measured values give a more reliable estimate.\n",
        );
    }

    out
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
