use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn roas_with_defaults_writes_report_and_chart() {
    let output_file = assert_fs::NamedTempFile::new("roas.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("adlift").unwrap();
    cmd.args(["roas", "-o", output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Efficiency Report"))
        .stdout(predicate::str::contains(format!(
            "Efficiency report written to {output_arg}"
        )));

    let contents = std::fs::read_to_string(output_arg).unwrap();
    let report: serde_yaml::Value = serde_yaml::from_str(&contents).unwrap();

    // Default scenario: organic 5000, spend 2000, ROAS 4.0, incrementality 0.5
    assert!((report["report"]["total_revenue"].as_f64().unwrap() - 9000.0).abs() < 1e-9);
    assert!((report["report"]["iroas"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    assert!((report["report"]["mer"].as_f64().unwrap() - 4.5).abs() < 1e-9);
    assert_eq!(report["curve"].as_sequence().unwrap().len(), 21);

    let chart_path = format!("{output_arg}.png");
    assert!(std::fs::metadata(&chart_path).unwrap().len() > 0);
    std::fs::remove_file(&chart_path).unwrap();
}

#[test]
fn roas_accepts_a_scenario_file() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file
        .write_str("ad_spend: 1000\nplatform_roas: 3.0\nincrementality: 1.0\n")
        .unwrap();
    let output_file = assert_fs::NamedTempFile::new("roas.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("adlift").unwrap();
    cmd.args([
        "roas",
        "-i",
        scenario_file.path().to_str().unwrap(),
        "-o",
        output_arg,
    ]);
    cmd.assert().success();

    let contents = std::fs::read_to_string(output_arg).unwrap();
    let report: serde_yaml::Value = serde_yaml::from_str(&contents).unwrap();

    // Fully incremental: iROAS equals the reported ROAS.
    assert!((report["report"]["iroas"].as_f64().unwrap() - 3.0).abs() < 1e-9);
    assert!((report["scenario"]["ad_spend"].as_f64().unwrap() - 1000.0).abs() < 1e-9);

    std::fs::remove_file(format!("{output_arg}.png")).unwrap();
}

#[test]
fn roas_reports_a_zero_spend_scenario_on_stderr() {
    let scenario_file = assert_fs::NamedTempFile::new("scenario.yaml").unwrap();
    scenario_file.write_str("ad_spend: 0\n").unwrap();
    let output_file = assert_fs::NamedTempFile::new("roas.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("adlift").unwrap();
    cmd.args([
        "roas",
        "-i",
        scenario_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to compute efficiency metrics"));
    output_file.assert(predicate::path::missing());
}

#[test]
fn roas_exports_the_curve_as_json() {
    let output_file = assert_fs::NamedTempFile::new("roas.yaml").unwrap();
    let series_file = assert_fs::NamedTempFile::new("curve.json").unwrap();
    let output_arg = output_file.path().to_str().unwrap();
    let series_arg = series_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("adlift").unwrap();
    cmd.args(["roas", "-o", output_arg, "--series-json", series_arg]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Chart series written to {series_arg}"
        )));

    let json = std::fs::read_to_string(series_arg).unwrap();
    let curve: serde_json::Value = serde_json::from_str(&json).unwrap();
    let points = curve.as_array().unwrap();
    assert_eq!(points.len(), 21);
    assert!((points[0]["spend"].as_f64().unwrap()).abs() < 1e-9);
    assert!((points[20]["spend"].as_f64().unwrap() - 10000.0).abs() < 1e-9);

    std::fs::remove_file(format!("{output_arg}.png")).unwrap();
}
