use std::{collections::HashMap, fs, path::Path};

use heart_failure_predictor::{
    model::tensor_names, ArtifactErr, ArtifactPaths, PredictorContext, RequestHandler,
    ValidationErr,
};
use safetensors::{tensor::TensorView, Dtype};

fn to_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Writes a 4 -> 2 (relu) -> 1 (sigmoid) network and a standard scaler into `dir`.
///
/// The hidden layer passes the first two scaled features through and the output layer
/// computes `age - ejection_fraction`, so the probability is easy to predict by hand.
fn write_artifacts(dir: &Path) -> ArtifactPaths {
    let hidden_w = to_bytes(&[
        1.0, 0.0, //
        0.0, 1.0, //
        0.0, 0.0, //
        0.0, 0.0, //
    ]);
    let hidden_b = to_bytes(&[0.0, 0.0]);
    let out_w = to_bytes(&[1.0, -1.0]);
    let out_b = to_bytes(&[0.0]);

    let (w0, b0) = tensor_names(0);
    let (w1, b1) = tensor_names(1);
    let views: HashMap<String, TensorView<'_>> = [
        (w0, TensorView::new(Dtype::F32, vec![4, 2], &hidden_w).unwrap()),
        (b0, TensorView::new(Dtype::F32, vec![2], &hidden_b).unwrap()),
        (w1, TensorView::new(Dtype::F32, vec![2, 1], &out_w).unwrap()),
        (b1, TensorView::new(Dtype::F32, vec![1], &out_b).unwrap()),
    ]
    .into_iter()
    .collect();

    let bytes = safetensors::serialize(&views, &None).unwrap();
    fs::write(dir.join("weights.safetensors"), bytes).unwrap();

    fs::write(
        dir.join("model.json"),
        r#"{
            "weights": "weights.safetensors",
            "layers": [
                {"n": 4, "m": 2, "act_fn": "relu"},
                {"n": 2, "m": 1, "act_fn": "sigmoid"}
            ]
        }"#,
    )
    .unwrap();

    fs::write(
        dir.join("scaler.json"),
        r#"{"mean": [60.0, 38.0, 1.0, 136.0], "scale": [10.0, 10.0, 1.0, 4.0]}"#,
    )
    .unwrap();

    ArtifactPaths::resolve(dir, None, None, None)
}

fn sigmoid(z: f32) -> f32 {
    1. / (1. + (-z).exp())
}

#[test]
fn full_request_over_loaded_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let context = PredictorContext::load(&write_artifacts(dir.path())).unwrap();
    let mut handler = RequestHandler::new(&context);

    // scaled: [2.0, 0.0, ..] -> relu -> [2.0, 0.0] -> 2.0
    for (i, v) in ["80", "38", "1.1", "136"].into_iter().enumerate() {
        handler.set_field(i, v);
    }
    let result = handler.submit().unwrap();
    assert!((result.probability - sigmoid(2.0)).abs() < 1e-6);
    assert!(result.classification);

    // scaled: [0.0, 1.0, ..] -> relu -> [0.0, 1.0] -> -1.0
    handler.clear();
    for (i, v) in ["60", "48", "1.1", "136"].into_iter().enumerate() {
        handler.set_field(i, v);
    }
    let result = handler.submit().unwrap();
    assert!((result.probability - sigmoid(-1.0)).abs() < 1e-6);
    assert!(!result.classification);
}

#[test]
fn mean_input_sits_on_the_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let context = PredictorContext::load(&write_artifacts(dir.path())).unwrap();
    let mut handler = RequestHandler::new(&context);

    for (i, v) in ["60", "38", "1.0", "136"].into_iter().enumerate() {
        handler.set_field(i, v);
    }
    let result = handler.submit().unwrap();
    assert_eq!(result.probability, 0.5);
    assert!(!result.classification);
}

#[test]
fn validation_errors_surface_before_inference() {
    let dir = tempfile::tempdir().unwrap();
    let context = PredictorContext::load(&write_artifacts(dir.path())).unwrap();
    let mut handler = RequestHandler::new(&context);

    for (i, v) in ["60", "38", "", "136"].into_iter().enumerate() {
        handler.set_field(i, v);
    }
    let err = handler.submit().unwrap_err();
    assert_eq!(
        err,
        ValidationErr::MissingField {
            index: 2,
            label: "Serum creatinine (mg/dL)"
        }
    );
}

#[test]
fn missing_scaler_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(dir.path());
    fs::remove_file(&paths.scaler).unwrap();

    let err = PredictorContext::load(&paths).unwrap_err();
    assert!(matches!(err, ArtifactErr::Io { .. }));
    assert!(err.to_string().contains("scaler.json"));
}

#[test]
fn missing_weights_are_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_artifacts(dir.path());
    fs::remove_file(dir.path().join("weights.safetensors")).unwrap();

    let err = PredictorContext::load(&paths).unwrap_err();
    assert!(matches!(err, ArtifactErr::Io { .. }));
}

#[test]
fn bundled_demo_artifacts_load() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts");
    let context = PredictorContext::load(&ArtifactPaths::resolve(&dir, None, None, None)).unwrap();
    let mut handler = RequestHandler::new(&context);

    for (i, v) in ["60", "38", "1.1", "136"].into_iter().enumerate() {
        handler.set_field(i, v);
    }
    let result = handler.submit().unwrap();
    assert!((0.0..=1.0).contains(&result.probability));
    assert_eq!(result.classification, result.probability > 0.5);
}
