use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn bias_without_retargeting_claims_nothing() {
    let output_file = assert_fs::NamedTempFile::new("bias.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("adlift").unwrap();
    cmd.args(["bias", "-o", output_arg, "-s", "2026-03-01", "--seed", "5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Retargeting: off"));

    let contents = std::fs::read_to_string(output_arg).unwrap();
    let report: serde_yaml::Value = serde_yaml::from_str(&contents).unwrap();

    let days = report["days"].as_sequence().unwrap();
    assert_eq!(days.len(), 10);
    for day in days {
        assert_eq!(day["platform_claim"].as_f64().unwrap(), 0.0);
        assert_eq!(day["incremental"].as_f64().unwrap(), 0.0);
    }

    std::fs::remove_file(format!("{output_arg}.png")).unwrap();
}

#[test]
fn bias_with_retargeting_overstates_the_lift() {
    let output_file = assert_fs::NamedTempFile::new("bias.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("adlift").unwrap();
    cmd.args([
        "bias",
        "-r",
        "-o",
        output_arg,
        "-s",
        "2026-03-01",
        "--seed",
        "5",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Retargeting: on"));

    let contents = std::fs::read_to_string(output_arg).unwrap();
    let report: serde_yaml::Value = serde_yaml::from_str(&contents).unwrap();

    let days = report["days"].as_sequence().unwrap();
    assert_eq!(days.len(), 10);
    for day in days {
        let claimed = day["platform_claim"].as_f64().unwrap();
        let incremental = day["incremental"].as_f64().unwrap();
        assert!(claimed > incremental);
        assert!((incremental - 4.0).abs() < 1e-9);
    }

    std::fs::remove_file(format!("{output_arg}.png")).unwrap();
}

#[test]
fn bias_runs_are_reproducible_with_a_seed() {
    let first_file = assert_fs::NamedTempFile::new("first.yaml").unwrap();
    let second_file = assert_fs::NamedTempFile::new("second.yaml").unwrap();
    let first_arg = first_file.path().to_str().unwrap();
    let second_arg = second_file.path().to_str().unwrap();

    for output_arg in [first_arg, second_arg] {
        let mut cmd = assert_cmd::Command::cargo_bin("adlift").unwrap();
        cmd.args([
            "bias", "-r", "-o", output_arg, "-s", "2026-03-01", "--seed", "77",
        ]);
        cmd.assert().success();
        std::fs::remove_file(format!("{output_arg}.png")).unwrap();
    }

    let first = std::fs::read_to_string(first_arg).unwrap();
    let second = std::fs::read_to_string(second_arg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bias_rejects_a_malformed_start_date() {
    let output_file = assert_fs::NamedTempFile::new("bias.yaml").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("adlift").unwrap();
    cmd.args([
        "bias",
        "-o",
        output_file.path().to_str().unwrap(),
        "-s",
        "not-a-date",
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to simulate selection bias"));
    output_file.assert(predicate::path::missing());
}
