mod common;

use std::fs;

use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

use common::{cli, fixture_dataset};

#[test]
fn build_reports_each_saved_route() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("routes.json");

    cli()
        .arg("build")
        .arg("--input")
        .arg(fixture_dataset())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Calculating longest route (min length 10) for all starting countries...",
        ))
        .stdout(predicate::str::contains(
            "  - Portugal: Found path of 11 countries",
        ))
        .stdout(predicate::str::contains(
            "  - Monaco: Found path of 10 countries",
        ))
        .stdout(predicate::str::contains("Success! 5 routes saved to"))
        .stdout(predicate::str::contains(
            "Skipped 22 countries with paths shorter than 10.",
        ));

    let written = fs::read_to_string(&output).expect("routes written");
    assert!(written.starts_with("{\n  \"Portugal\": [\n    \"Portugal\","));
    assert!(!written.ends_with('\n'));

    let order: Vec<usize> = ["Portugal", "Spain", "Andorra", "Monaco", "Liechtenstein"]
        .iter()
        .map(|name| {
            written
                .find(&format!("\n  \"{name}\": ["))
                .expect("start key present")
        })
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));

    let parsed: Value = serde_json::from_str(&written).expect("valid json");
    let routes = parsed.as_object().expect("object");
    assert_eq!(routes.len(), 5);
    assert_eq!(routes["Portugal"].as_array().map(Vec::len), Some(11));
    assert_eq!(routes["Portugal"][10], "Poland");
}

#[test]
fn build_honours_min_length() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("routes.json");

    cli()
        .arg("build")
        .arg("--input")
        .arg(fixture_dataset())
        .arg("--output")
        .arg(&output)
        .arg("--min-length")
        .arg("11")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success! 1 routes saved to"))
        .stdout(predicate::str::contains(
            "Skipped 26 countries with paths shorter than 11.",
        ));

    let parsed: Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("routes written"))
            .expect("valid json");
    let routes = parsed.as_object().expect("object");
    assert_eq!(routes.len(), 1);
    assert!(routes.contains_key("Portugal"));
}

#[test]
fn quiet_build_only_prints_summary() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("routes.json");

    cli()
        .arg("build")
        .arg("--quiet")
        .arg("--input")
        .arg(fixture_dataset())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found path of").not())
        .stdout(predicate::str::contains("Success! 5 routes saved to"));

    assert!(output.exists());
}

#[test]
fn build_uses_default_file_names() {
    let temp = tempdir().expect("create temp dir");
    fs::copy(fixture_dataset(), temp.path().join("flags.json")).expect("copy fixture");

    cli()
        .current_dir(temp.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success! 5 routes saved to longest_routes.json",
        ));

    assert!(temp.path().join("longest_routes.json").exists());
}

#[test]
fn json_build_output_lists_counts_and_routes() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("routes.json");

    let assert = cli()
        .arg("--format")
        .arg("json")
        .arg("build")
        .arg("--input")
        .arg(fixture_dataset())
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let parsed: Value = serde_json::from_str(&stdout).expect("json stdout");
    assert_eq!(parsed["accepted"], 5);
    assert_eq!(parsed["skipped"], 22);
    assert_eq!(parsed["min_length"], 10);
    assert_eq!(parsed["routes"]["Monaco"][0], "Monaco");
    assert!(output.exists());
}

#[test]
fn missing_input_fails_without_writing_output() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("routes.json");

    cli()
        .arg("build")
        .arg("--input")
        .arg(temp.path().join("nope.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("input dataset not found"))
        .stdout(predicate::str::contains("Success!").not());

    assert!(!output.exists());
}

#[test]
fn malformed_input_fails_without_writing_output() {
    let temp = tempdir().expect("create temp dir");
    let input = temp.path().join("broken.json");
    let output = temp.path().join("routes.json");
    fs::write(&input, "[{\"country\": \"Spain\", \"borders\": [").expect("write input");

    cli()
        .arg("build")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not decode input dataset"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let temp = tempdir().expect("create temp dir");
    let output = temp.path().join("missing-dir").join("routes.json");

    cli()
        .arg("build")
        .arg("--input")
        .arg(fixture_dataset())
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not write routes to"));
}

#[test]
fn duplicate_records_each_report_their_route() {
    let temp = tempdir().expect("create temp dir");
    let input = temp.path().join("flags.json");
    let output = temp.path().join("routes.json");
    fs::write(
        &input,
        r#"[{"country": "A", "borders": ["B"]},
            {"country": "B", "borders": ["A"]},
            {"country": "A", "borders": []}]"#,
    )
    .expect("write input");

    let assert = cli()
        .arg("build")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--min-length")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success! 2 routes saved to"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let found: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("  - "))
        .collect();
    assert_eq!(
        found,
        vec![
            "  - A: Found path of 2 countries",
            "  - B: Found path of 2 countries",
            "  - A: Found path of 1 countries",
        ]
    );

    let written = fs::read_to_string(&output).expect("routes written");
    assert_eq!(
        written,
        "{\n  \"A\": [\n    \"A\"\n  ],\n  \"B\": [\n    \"B\",\n    \"A\"\n  ]\n}"
    );
}
