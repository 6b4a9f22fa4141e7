use super::*;

#[test]
fn test_sex_specific_lookup() {
    assert_eq!(*SCORE2.baseline_survival.get(Sex::Male), 0.9605);
    assert_eq!(*SCORE2.baseline_survival.get(Sex::Female), 0.9776);
    assert_eq!(SCORE2.coefficients.get(Sex::Female).age, 0.4648);
    assert_eq!(SCORE2_OP.mean_linear_predictor.get(Sex::Male), &0.0929);
}

#[test]
fn test_calibration_scale_lookup() {
    let s = SCORE2_CALIBRATION.scale(RiskRegion::VeryHigh, Sex::Female);
    assert_eq!(s.scale1, 0.9412);
    assert_eq!(s.scale2, 0.8329);

    let op = SCORE2_OP_CALIBRATION.scale(RiskRegion::Low, Sex::Male);
    assert_eq!(op.scale1, -0.34);
    assert_eq!(op.scale2, 1.19);
}

#[test]
fn test_diabetes_model_shares_score2_survival_and_calibration() {
    assert_eq!(SCORE2_DIABETES.baseline_survival, SCORE2.baseline_survival);
    assert!(std::ptr::eq(SCORE2_DIABETES.calibration, SCORE2.calibration));
    for region in RiskRegion::ALL {
        for sex in [Sex::Male, Sex::Female] {
            assert_eq!(
                SCORE2_DIABETES.calibration.scale(region, sex),
                SCORE2_CALIBRATION.scale(region, sex)
            );
        }
    }
}

#[test]
fn test_op_table_differs_from_score2() {
    assert_ne!(
        SCORE2_OP.calibration.scale(RiskRegion::High, Sex::Male),
        SCORE2.calibration.scale(RiskRegion::High, Sex::Male)
    );
}
