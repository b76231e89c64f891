#![warn(clippy::pedantic)]

use std::fs;
use std::path::Path;

use approx::assert_relative_eq;
use serde_json::json;
use tempfile::TempDir;
use webcrippling::config::ModelsConfig;
use webcrippling::{Form, ModelError, Predictor, FIELDS, FIELD_COUNT};

/// Forest whose trees split on web depth and yield strength.
fn write_forest(path: &Path) {
    let document = json!({
        "kind": "random_forest",
        "n_features": 8,
        "trees": [
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [0, -2, -2],
                "threshold": [200.5, -2.0, -2.0],
                "value": [15.0, 10.0, 20.0]
            },
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [7, -2, -2],
                "threshold": [350.0, -2.0, -2.0],
                "value": [15.0, 12.0, 18.0]
            }
        ]
    });
    fs::write(path, document.to_string()).expect("write forest model");
}

/// Linear model weighting thickness and bearing plate length.
fn write_linear(path: &Path) {
    let document = json!({
        "kind": "linear",
        "n_features": 8,
        "coefficients": [0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.05, 0.0],
        "intercept": 1.0
    });
    fs::write(path, document.to_string()).expect("write linear model");
}

fn load_predictor() -> (TempDir, Predictor) {
    let dir = tempfile::tempdir().expect("temporary directory");
    let config = ModelsConfig {
        iof_path: dir.path().join("IOF_RF.json"),
        eof_path: dir.path().join("EOF_RF.json"),
    };
    write_forest(&config.iof_path);
    write_linear(&config.eof_path);
    let predictor = Predictor::load(&config).expect("both models load");
    (dir, predictor)
}

fn form_with(values: [f64; FIELD_COUNT]) -> Form {
    Form::with_entries(values.map(|value| value.to_string()))
}

fn midpoints() -> [f64; FIELD_COUNT] {
    FIELDS.map(|field| field.midpoint())
}

#[test]
fn every_bound_is_inclusive() {
    let (_dir, predictor) = load_predictor();
    for (idx, field) in FIELDS.iter().enumerate() {
        for bound in [field.min, field.max] {
            let mut values = midpoints();
            values[idx] = bound;
            let mut form = form_with(values);
            let result = form.submit(&predictor).to_string();
            assert!(
                result.starts_with("Predicted IOF: "),
                "{} = {bound} rejected: {result}",
                field.key
            );
        }
    }
}

#[test]
fn every_field_rejects_one_unit_outside_its_range() {
    let (_dir, predictor) = load_predictor();
    for (idx, field) in FIELDS.iter().enumerate() {
        let expected = format!(
            "{} must be between {} and {}.",
            field.key.replace('_', " "),
            field.min,
            field.max
        );
        for value in [field.min - 1.0, field.max + 1.0] {
            let mut values = midpoints();
            values[idx] = value;
            let mut form = form_with(values);
            assert_eq!(form.submit(&predictor), expected, "{} = {value}", field.key);
        }
    }
}

#[test]
fn non_numeric_text_gets_generic_message() {
    let (_dir, predictor) = load_predictor();
    for idx in 0..FIELD_COUNT {
        let mut form = form_with(midpoints());
        form.set_entry(idx, "twelve");
        assert_eq!(form.submit(&predictor), "Check numeric input values.");
    }
}

#[test]
fn reference_specimen_yields_both_capacities() {
    let (_dir, predictor) = load_predictor();
    let mut form = Form::with_entries(
        ["200", "55", "1.5", "4", "67", "9", "100", "400"].map(String::from),
    );

    let features = form.validate().expect("reference specimen is valid");
    let capacity = predictor.predict(&features).expect("models accept it");
    // Web 200 <= 200.5 gives 10, yield 400 > 350 gives 18.
    assert_relative_eq!(capacity.iof_kilonewtons(), 14.0);
    assert_relative_eq!(capacity.eof_kilonewtons(), 1.0 + 4.0 * 1.5 + 0.05 * 100.0);

    assert_eq!(
        form.submit(&predictor),
        "Predicted IOF: 14.0 kN\nPredicted EOF: 12.0 kN"
    );
}

#[test]
fn result_is_overwritten_on_each_submission() {
    let (_dir, predictor) = load_predictor();
    let mut form = form_with(midpoints());
    form.submit(&predictor);
    assert!(form.result().starts_with("Predicted IOF: "));

    form.set_entry(0, "");
    form.submit(&predictor);
    assert_eq!(form.result(), "Check numeric input values.");
}

#[test]
fn estimator_failure_is_reported_not_raised() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let config = ModelsConfig {
        iof_path: dir.path().join("IOF_RF.json"),
        eof_path: dir.path().join("EOF_RF.json"),
    };
    write_forest(&config.iof_path);
    let narrow = json!({
        "kind": "linear",
        "n_features": 7,
        "coefficients": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        "intercept": 0.0
    });
    fs::write(&config.eof_path, narrow.to_string()).expect("write linear model");
    let predictor = Predictor::load(&config).expect("both models load");

    let mut form = form_with(midpoints());
    assert_eq!(
        form.submit(&predictor),
        "Error in prediction: X has 8 features, but LinearRegression is expecting 7 features as input."
    );
}

#[test]
fn missing_model_file_stops_startup() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let config = ModelsConfig {
        iof_path: dir.path().join("IOF_RF.json"),
        eof_path: dir.path().join("EOF_RF.json"),
    };
    write_forest(&config.iof_path);

    let error = Predictor::load(&config).expect_err("EOF model is missing");
    match error {
        ModelError::Io { path, .. } => assert_eq!(path, config.eof_path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_model_file_stops_startup() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let config = ModelsConfig {
        iof_path: dir.path().join("IOF_RF.json"),
        eof_path: dir.path().join("EOF_RF.json"),
    };
    fs::write(&config.iof_path, "{\"kind\": \"random_forest\"").expect("write truncated model");
    write_linear(&config.eof_path);
    assert!(matches!(
        Predictor::load(&config),
        Err(ModelError::Parse { .. })
    ));

    let empty = json!({ "kind": "random_forest", "n_features": 8, "trees": [] });
    fs::write(&config.iof_path, empty.to_string()).expect("write empty forest");
    let error = Predictor::load(&config).expect_err("empty forest rejected");
    assert!(error.to_string().contains("random forest contains no trees"));
}
