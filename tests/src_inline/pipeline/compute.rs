use super::*;
use crate::model::answers::{
    Hba1cProxyAnswers, ParameterAnswer, SbpProxyAnswers, SleepPattern, SmokingStatus,
    StressResponse,
};
use crate::model::profile::{RiskRegion, Sex};
use crate::model::result::RiskModel;
use crate::model::values::ClinicalParameter;

fn answers(sbp: f64, tchol: f64, hdl: f64) -> RawAnswerSet {
    RawAnswerSet {
        has_diabetes: false,
        smoking_status: SmokingStatus::NotCurrentlySmoking,
        age_at_diabetes_diagnosis: None,
        sbp: ParameterAnswer::manual(sbp),
        tchol: ParameterAnswer::manual(tchol),
        hdl: ParameterAnswer::manual(hdl),
        hba1c: None,
        scr: None,
    }
}

fn diabetic_answers(scr: f64) -> RawAnswerSet {
    RawAnswerSet {
        has_diabetes: true,
        age_at_diabetes_diagnosis: Some(50),
        hba1c: Some(ParameterAnswer::manual(53.0)),
        scr: Some(ParameterAnswer::manual(scr)),
        ..answers(130.0, 5.0, 1.2)
    }
}

#[test]
fn test_scenario_general_population_low_region() {
    let profile = ClinicalProfile::new(55, Sex::Male, "Japan");
    let result = compute_risk(&answers(130.0, 5.0, 1.2), &profile).unwrap();
    assert_eq!(result.model_used, RiskModel::Score2);
    assert_eq!(result.determined_risk_region, RiskRegion::Low);
    let pct = result.calibrated_10_year_risk_percent;
    assert!(pct > 0.0 && pct < 15.0);
    assert!((pct - 3.92).abs() < 0.011);
    assert_eq!(result.final_clinical_inputs.sbp, 130.0);
}

#[test]
fn test_region_changes_calibration_only() {
    let answers = answers(130.0, 5.0, 1.2);
    let low = compute_risk(&answers, &ClinicalProfile::new(55, Sex::Male, "japan")).unwrap();
    let high = compute_risk(&answers, &ClinicalProfile::new(55, Sex::Male, "atlantis")).unwrap();
    assert_eq!(high.determined_risk_region, RiskRegion::High);
    assert!((high.calibrated_10_year_risk_percent - 4.87).abs() < 0.011);
    assert!(high.calibrated_10_year_risk_percent > low.calibrated_10_year_risk_percent);
    assert_eq!(low.final_clinical_inputs, high.final_clinical_inputs);
}

#[test]
fn test_scenario_older_population() {
    let profile = ClinicalProfile::new(75, Sex::Female, "singapore");
    let result = compute_risk(&answers(140.0, 5.0, 1.5), &profile).unwrap();
    assert_eq!(result.model_used, RiskModel::Score2Op);
    assert!((result.calibrated_10_year_risk_percent - 9.22).abs() < 0.011);

    let other = compute_risk(&answers(180.0, 7.5, 0.9), &profile).unwrap();
    assert_eq!(other.model_used, RiskModel::Score2Op);
}

#[test]
fn test_scenario_diabetes_creatinine_sensitivity() {
    let profile = ClinicalProfile::new(60, Sex::Male, "Malaysia");
    let base = compute_risk(&diabetic_answers(0.9), &profile).unwrap();
    let worse = compute_risk(&diabetic_answers(1.3), &profile).unwrap();
    assert_eq!(base.model_used, RiskModel::Score2Diabetes);
    assert!((base.calibrated_10_year_risk_percent - 13.64).abs() < 0.011);
    assert!((worse.calibrated_10_year_risk_percent - 16.28).abs() < 0.011);
    assert_ne!(
        base.calibrated_10_year_risk_percent,
        worse.calibrated_10_year_risk_percent
    );

    let female = ClinicalProfile::new(60, Sex::Female, "Malaysia");
    let f = compute_risk(&diabetic_answers(0.9), &female).unwrap();
    assert_eq!(f.model_used, RiskModel::Score2Diabetes);
}

#[test]
fn test_scenario_manual_sbp_bypasses_proxy() {
    let profile = ClinicalProfile::new(52, Sex::Female, "thailand");
    let mut a = answers(140.0, 5.2, 1.3);
    a.sbp.proxy_answers = Some(SbpProxyAnswers::default());
    let mut b = a.clone();
    b.sbp.proxy_answers = Some(SbpProxyAnswers {
        sleep_pattern: Some(SleepPattern::Insomnia),
        stress_response: Some(StressResponse::PalpitationsAndFlushing),
        ..Default::default()
    });
    let ra = compute_risk(&a, &profile).unwrap();
    let rb = compute_risk(&b, &profile).unwrap();
    assert_eq!(ra, rb);
    assert!(ra.estimated_parameters.is_empty());
}

#[test]
fn test_proxy_results_are_deterministic_and_flagged() {
    let profile = ClinicalProfile::new(64, Sex::Male, "india");
    let mut a = diabetic_answers(1.0);
    a.sbp = ParameterAnswer::proxy(SbpProxyAnswers {
        family_hypertension: Some(true),
        ..Default::default()
    });
    a.hba1c = Some(ParameterAnswer::proxy(Hba1cProxyAnswers::default()));

    let first = compute_risk(&a, &profile).unwrap();
    let second = compute_risk(&a, &profile).unwrap();
    assert_eq!(first, second);
    assert!(first.is_estimated(ClinicalParameter::Sbp));
    assert!(first.is_estimated(ClinicalParameter::Hba1c));
    assert!(!first.is_estimated(ClinicalParameter::SerumCreatinine));
}

#[test]
fn test_region_override_map() {
    let map = RegionMap::from_entries([(RiskRegion::VeryHigh, vec!["Japan".to_string()])]);
    let profile = ClinicalProfile::new(55, Sex::Male, "japan");
    let result = compute_risk_with(&answers(130.0, 5.0, 1.2), &profile, &map).unwrap();
    assert_eq!(result.determined_risk_region, RiskRegion::VeryHigh);
}

#[test]
fn test_engine_errors_surface_unchanged() {
    let profile = ClinicalProfile::new(60, Sex::Male, "china");
    let mut a = diabetic_answers(0.9);
    a.age_at_diabetes_diagnosis = None;
    assert_eq!(
        compute_risk(&a, &profile).unwrap_err(),
        EngineError::MissingDiagnosisAge
    );
}

#[test]
fn test_compute_risk_is_thread_safe() {
    let profile = ClinicalProfile::new(58, Sex::Female, "vietnam");
    let answers = answers(135.0, 5.8, 1.4);
    let expected = compute_risk(&answers, &profile).unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| compute_risk(&answers, &profile).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
