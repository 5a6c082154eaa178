//! End-to-end runs of the `basilisk` binary.

use std::path::Path;
use std::process::Command;

fn basilisk(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_basilisk"))
        .args(args)
        .output()
        .unwrap()
}

fn write_generator_config(dir: &Path) -> String {
    let path = dir.join("dsgen.json");
    std::fs::write(
        &path,
        r#"{
            "classes": {
                "small": [{"name": "length", "lower": 0, "upper": 10, "allocationsByQuintile": [100]}],
                "large": [{"name": "length", "lower": 0, "upper": 10, "allocationsByQuintile": [0, 0, 0, 0, 100]}]
            },
            "recordCount": 120
        }"#,
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn generate_split_evaluate() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_generator_config(dir.path());
    let data = dir.path().join("birds.csv");
    let data_str = data.to_str().unwrap();

    let out = basilisk(&["generate", "--config", &config, "--output", data_str, "--seed", "5"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let csv = std::fs::read_to_string(&data).unwrap();
    assert_eq!(csv.lines().count(), 121);

    let training = dir.path().join("training.csv");
    let test = dir.path().join("test.csv");
    let out = basilisk(&[
        "split",
        "--data",
        data_str,
        "--training-out",
        training.to_str().unwrap(),
        "--test-out",
        test.to_str().unwrap(),
        "--training-share",
        "0.5",
        "--seed",
        "1",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(std::fs::read_to_string(&training).unwrap().lines().count(), 61);
    assert_eq!(std::fs::read_to_string(&test).unwrap().lines().count(), 61);

    let toml = dir.path().join("basilisk.toml");
    std::fs::write(
        &toml,
        format!(
            "seed = 3\n\n[data]\npath = {data_str:?}\n\n[[models]]\nkind = \"knn\"\nk = 3\n\n[[models]]\nkind = \"naive-bayes\"\n"
        ),
    )
    .unwrap();
    let out = basilisk(&["evaluate", "--config", toml.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let models = report.as_array().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["kind"], "KNearestNeighbors Classifier");
    assert_eq!(models[1]["config"]["kind"], "naive-bayes");
    for m in models {
        assert_eq!(m["analysis"]["results"], 30);
    }
    // The two classes are 6 units apart, so every nearest neighbor agrees.
    assert_eq!(models[0]["analysis"]["accuracy"], 1.0);
    assert!(models[1]["analysis"]["accuracy"].as_f64().unwrap() >= 0.9);
}

#[test]
fn evaluate_without_models_fails() {
    let dir = tempfile::tempdir().unwrap();
    let toml = dir.path().join("basilisk.toml");
    std::fs::write(&toml, "[data]\npath = \"missing.json\"\n").unwrap();
    let out = basilisk(&["evaluate", "--config", toml.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no models configured"), "{stderr}");
}
