use std::fs;

use admit_chance::app::pipeline::{predict_profile, run_batch};
use admit_chance::classify::{classify, classify_value};
use admit_chance::domain::{AdmissionProfile, ChanceLabel, InputPolicy, Percentage, RunConfig};
use admit_chance::io::{read_profile_json, write_results_csv};
use admit_chance::models::{Predictor, predict};

#[test]
fn maximal_profile_is_exactly_100() {
    let profile = AdmissionProfile {
        gre: 340,
        toefl: 120,
        university_rating: 5,
        sop: 5,
        lor: 5,
        cgpa: 9.92,
        research: true,
    };
    let chance = predict(&profile).unwrap();
    assert_eq!(chance.value(), 100);
    assert_eq!(classify(chance), ChanceLabel::Excellent);
}

#[test]
fn reference_profile_regression() {
    let profile = AdmissionProfile {
        gre: 320,
        toefl: 110,
        university_rating: 3,
        sop: 3,
        lor: 3,
        cgpa: 8.5,
        research: false,
    };
    assert_eq!(predict(&profile).unwrap().value(), 70);
}

#[test]
fn classifier_boundaries() {
    let cases = [
        (80, ChanceLabel::Excellent),
        (79, ChanceLabel::Good),
        (60, ChanceLabel::Good),
        (59, ChanceLabel::Moderate),
        (0, ChanceLabel::VeryLow),
        (100, ChanceLabel::Excellent),
    ];
    for (value, expected) in cases {
        assert_eq!(classify_value(value).unwrap(), expected, "classify({value})");
    }
    assert!(Percentage::new(101).is_err());
}

#[test]
fn predictor_is_shareable_across_threads() {
    let predictor = Predictor::standard().unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || predictor.predict(&AdmissionProfile::default()).unwrap()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().value(), 70);
    }
}

#[test]
fn batch_csv_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("profiles.csv");
    let export = dir.path().join("scored.csv");
    fs::write(
        &input,
        "id,gre,toefl,university_rating,sop,lor,cgpa,research\n\
         alice,320,110,3,3,3,8.5,false\n\
         bob,300,95,1,2,2,7.0,false\n\
         carol,335,118,5,5,5,9.8,true\n\
         dave,500,110,3,3,3,8.5,false\n",
    )
    .unwrap();

    let output = run_batch(&input, &RunConfig::default()).unwrap();
    assert_eq!(output.rows_read, 4);
    assert_eq!(output.scored.len(), 3);
    assert_eq!(output.row_errors.len(), 1);
    assert_eq!(output.row_errors[0].id.as_deref(), Some("dave"));

    write_results_csv(&export, &output.scored).unwrap();
    let text = fs::read_to_string(&export).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("alice,"));
    assert!(lines[1].ends_with(",70,Good,emerald"));
    assert!(lines[3].starts_with("carol,"));
    assert!(lines[3].ends_with(",98,Excellent,green"));
}

#[test]
fn clamp_policy_from_config() {
    let profile = AdmissionProfile {
        cgpa: 11.0,
        ..AdmissionProfile::default()
    };
    assert!(predict_profile(profile, &RunConfig::default()).is_err());

    let config = RunConfig {
        policy: InputPolicy::Clamp,
        json: false,
    };
    let report = predict_profile(profile, &config).unwrap();
    // cgpa pulled to 9.92: 0.69805 + 1.42 * 0.1183 = 0.866036
    assert_eq!(report.result.percentage.value(), 87);
    assert_eq!(report.profile.cgpa, 9.92);
}

#[test]
fn profile_json_file_feeds_the_predictor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("me.json");
    fs::write(
        &path,
        r#"{"gre":320,"toefl":110,"university_rating":3,"sop":3,"lor":3,"cgpa":8.5,"research":true}"#,
    )
    .unwrap();
    let profile = read_profile_json(&path).unwrap();
    let report = predict_profile(profile, &RunConfig::default()).unwrap();
    assert_eq!(report.result.percentage.value(), 72);
}
