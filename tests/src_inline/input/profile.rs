use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn input(age: Option<u32>, dob: Option<NaiveDate>) -> ProfileInput {
    ProfileInput {
        age,
        date_of_birth: dob,
        sex: Sex::Female,
        country_of_residence: "Japan".to_string(),
    }
}

#[test]
fn test_age_on_birthday_boundary() {
    let dob = date(1970, 6, 15);
    assert_eq!(age_on(dob, date(2025, 6, 14)), Some(54));
    assert_eq!(age_on(dob, date(2025, 6, 15)), Some(55));
    assert_eq!(age_on(dob, date(1969, 1, 1)), None);
}

#[test]
fn test_stated_age_used_without_dob() {
    let profile = input(Some(62), None).into_profile(date(2025, 1, 1)).unwrap();
    assert_eq!(profile.age, 62);
    assert_eq!(profile.sex, Sex::Female);
    assert_eq!(profile.country_of_residence, "Japan");
}

#[test]
fn test_dob_wins_over_stated_age() {
    let profile = input(Some(40), Some(date(1950, 3, 1)))
        .into_profile(date(2025, 3, 1))
        .unwrap();
    assert_eq!(profile.age, 75);
}

#[test]
fn test_future_dob_rejected() {
    let err = input(None, Some(date(2030, 1, 1)))
        .into_profile(date(2025, 1, 1))
        .unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_missing_age_rejected() {
    let err = input(None, None).into_profile(date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_profile_json_shape() {
    let parsed: ProfileInput = serde_json::from_str(
        r#"{"date_of_birth": "1961-11-02", "sex": "male", "country_of_residence": "India"}"#,
    )
    .unwrap();
    assert_eq!(parsed.date_of_birth, Some(date(1961, 11, 2)));
    assert_eq!(parsed.age, None);
    assert_eq!(parsed.sex, Sex::Male);
}
