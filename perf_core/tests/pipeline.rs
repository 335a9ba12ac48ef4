//! End-to-end submission pipeline: validate, log, derive, predict.

use perf_core::{
    validate, FeatureVector, ModelError, Predictor, RawSubmission, SubmissionLog, FEATURE_COLUMNS,
};

fn raw(age: &str, study: &str, absences: &str, gpa: &str) -> RawSubmission {
    RawSubmission {
        name: "Dana".into(),
        age: age.into(),
        study_time: study.into(),
        absences: absences.into(),
        gpa: gpa.into(),
    }
}

fn write_model(dir: &std::path::Path, weights: [f64; 5], intercept: f64) -> std::path::PathBuf {
    let path = dir.join("model.json");
    let model = serde_json::json!({
        "columns": FEATURE_COLUMNS,
        "weights": weights,
        "intercept": intercept,
    });
    std::fs::write(&path, serde_json::to_string_pretty(&model).unwrap()).unwrap();
    path
}

#[test]
fn valid_submission_flows_through_to_a_score() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = write_model(dir.path(), [0.1, 0.0, 0.0, 0.0, 0.05], 1.0);
    let log_path = dir.path().join("user_logs.csv");

    let submission = raw("16", "10", "2", "3.5");
    let inputs = validate(&submission).expect("submission is valid");

    SubmissionLog::new(&log_path).append(&submission).unwrap();

    let features = FeatureVector::from_inputs(&inputs);
    let predictor = Predictor::from_path(&model_path);
    assert!(predictor.is_available());

    let score = predictor.predict(&features).unwrap();
    // raw = 0.1*10 + 0.05*35 + 1 = 3.75 → sqrt = 1.9364... → 1.936
    assert_eq!(score, 1.936);

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.lines().nth(1).unwrap().ends_with(",Dana,3.5,16,10,2"));
}

#[test]
fn invalid_submission_writes_nothing_and_predicts_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("user_logs.csv");

    let submission = raw("12", "10", "2", "3.5");
    let errors = validate(&submission).unwrap_err();
    assert!(errors[0].to_string().contains("between 15 and 100"));

    // The caller gates both side effects behind validation; nothing to
    // write means the log file never appears.
    assert!(!log_path.exists());
}

#[test]
fn model_trained_on_other_columns_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let model = serde_json::json!({
        "columns": ["Weekly_Study_Time", "Absences", "Absence_Rate", "Absence_Impact", "Study_Impact"],
        "weights": [0.0, 0.0, 0.0, 0.0, 0.0],
        "intercept": 0.0,
    });
    std::fs::write(&path, model.to_string()).unwrap();

    let predictor = Predictor::from_path(&path);
    assert!(!predictor.is_available());

    let inputs = validate(&raw("16", "10", "2", "3.5")).unwrap();
    let err = predictor.predict(&FeatureVector::from_inputs(&inputs)).unwrap_err();
    assert!(matches!(err, ModelError::Unavailable(_)));
}
