use super::*;

#[test]
fn test_tchol_baseline() {
    let answers = TcholProxyAnswers::default();
    assert_eq!(estimate_tchol(&answers, SmokingStatus::NotCurrentlySmoking), 4.0);
}

#[test]
fn test_tchol_all_answers() {
    let answers = TcholProxyAnswers {
        family_cholesterol_or_heart_attack: Some(true),
        cooking_oil: Some(CookingOil::PalmOrBulk),
        exercise_type: Some(ExerciseType::AlmostNever),
        xanthoma: Some(true),
        fish_intake: Some(FishIntake::TwiceWeeklyOrMore),
    };
    // 4.0 + 0.7 + 1.2 + 0.5 + 3.0 + 0.4 - 0.3
    assert_eq!(estimate_tchol(&answers, SmokingStatus::ActiveSmoker), 9.5);
}

#[test]
fn test_tchol_unanswered_exercise_adds_nothing() {
    let mut answers = TcholProxyAnswers {
        cooking_oil: Some(CookingOil::Other),
        ..Default::default()
    };
    assert_eq!(estimate_tchol(&answers, SmokingStatus::NotCurrentlySmoking), 4.0);

    answers.exercise_type = Some(ExerciseType::LightRoutine);
    assert_eq!(estimate_tchol(&answers, SmokingStatus::NotCurrentlySmoking), 4.0);

    answers.exercise_type = Some(ExerciseType::AlmostNever);
    assert_eq!(estimate_tchol(&answers, SmokingStatus::NotCurrentlySmoking), 4.5);
}

#[test]
fn test_tchol_fish_and_family_history() {
    let answers = TcholProxyAnswers {
        family_cholesterol_or_heart_attack: Some(true),
        fish_intake: Some(FishIntake::TwiceWeeklyOrMore),
        ..Default::default()
    };
    assert_eq!(estimate_tchol(&answers, SmokingStatus::NotCurrentlySmoking), 4.4);
}
