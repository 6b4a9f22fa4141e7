use super::*;

fn profile(sex: Sex) -> ClinicalProfile {
    ClinicalProfile::new(50, sex, "malaysia")
}

#[test]
fn test_hdl_unanswered_counts_as_sedentary() {
    let answers = HdlProxyAnswers::default();
    assert_eq!(
        estimate_hdl(&answers, &profile(Sex::Female), SmokingStatus::NotCurrentlySmoking),
        1.1
    );
    assert_eq!(
        estimate_hdl(&answers, &profile(Sex::Male), SmokingStatus::NotCurrentlySmoking),
        0.9
    );
}

#[test]
fn test_hdl_exercise_modifiers() {
    let mut answers = HdlProxyAnswers {
        exercise_type: Some(ExerciseType::ResistanceOrHiit),
        fish_intake: None,
    };
    assert_eq!(
        estimate_hdl(&answers, &profile(Sex::Male), SmokingStatus::NotCurrentlySmoking),
        1.4
    );

    answers.exercise_type = Some(ExerciseType::LightRoutine);
    answers.fish_intake = Some(FishIntake::TwiceWeeklyOrMore);
    assert_eq!(
        estimate_hdl(&answers, &profile(Sex::Male), SmokingStatus::NotCurrentlySmoking),
        1.35
    );
}

#[test]
fn test_hdl_smoking_lowers_estimate() {
    let answers = HdlProxyAnswers {
        exercise_type: Some(ExerciseType::ResistanceOrHiit),
        fish_intake: Some(FishIntake::Rarely),
    };
    assert_eq!(
        estimate_hdl(&answers, &profile(Sex::Female), SmokingStatus::ActiveSmoker),
        1.35
    );
}
