//! Integration tests for the `generate` and `check` commands.
//!
//! Templates and spec maps are read from `tests/fixtures/` or written to temp
//! files, and the JSON the command writes is parsed back and checked.

use autofixture::commands::{run_check, run_generate, CheckArgs, GenerateArgs};
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

const SEED: u64 = 42;

fn args(template: &str, spec: Option<&str>, count: usize) -> GenerateArgs {
    GenerateArgs {
        template: template.into(),
        spec: spec.map(Into::into),
        count,
        seed: Some(SEED),
        pretty: false,
    }
}

fn generate(args: &GenerateArgs) -> anyhow::Result<Vec<Value>> {
    let mut out = Vec::new();
    run_generate(args, &mut out)?;
    Ok(serde_json::from_slice(&out)?)
}

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_generate_contacts_from_fixtures() {
    let records = generate(&args(
        "tests/fixtures/contact_template.json",
        Some("tests/fixtures/contact_spec.yaml"),
        5,
    ))
    .unwrap();

    assert_eq!(records.len(), 5);
    for record in &records {
        let id = record["id"].as_i64().unwrap();
        assert!((1..=100_000).contains(&id));
        assert_eq!(record["firstName"].as_str().unwrap().len(), 10);
        assert_eq!(record["lastName"].as_str().unwrap().len(), 12);
        assert!(record["star"].is_boolean());

        let number = record["address"]["number"].as_i64().unwrap();
        assert!((1..=200).contains(&number));
        assert_eq!(record["address"]["street"].as_str().unwrap().len(), 10);

        let phones = record["phones"].as_array().unwrap();
        assert_eq!(phones.len(), 3);
        for phone in phones {
            assert_eq!(phone["number"].as_str().unwrap().len(), 7);
        }
    }
}

#[test]
fn test_generate_without_spec() {
    let records = generate(&args("tests/fixtures/contact_template.json", None, 3)).unwrap();

    assert_eq!(records.len(), 3);
    assert_ne!(records[0]["firstName"], records[1]["firstName"]);
    // Template values are never copied through.
    assert!(records.iter().all(|r| r["firstName"] != "first"));
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let args = args(
        "tests/fixtures/contact_template.json",
        Some("tests/fixtures/contact_spec.yaml"),
        3,
    );
    assert_eq!(generate(&args).unwrap(), generate(&args).unwrap());
}

#[test]
fn test_generate_pretty_output() {
    let mut generate_args = args("tests/fixtures/contact_template.json", None, 1);
    generate_args.pretty = true;

    let mut out = Vec::new();
    run_generate(&generate_args, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\n  "));
    let records: Vec<Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_generate_reports_unknown_field() {
    let spec = temp_file("middleName: string\n");
    let path = spec.path().to_str().unwrap();

    let err = generate(&args("tests/fixtures/contact_template.json", Some(path), 3)).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("'middleName' that is not in the type"), "{message}");
}

#[test]
fn test_generate_reports_malformed_spec() {
    let spec = temp_file(r#"{"id": "integer < 5.5"}"#);
    let path = spec.path().to_str().unwrap();

    let err = generate(&args("tests/fixtures/contact_template.json", Some(path), 3)).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("contains real value: 5.5"), "{message}");
}

#[test]
fn test_generate_rejects_non_object_template() {
    let template = temp_file("[1, 2, 3]");
    let path = template.path().to_str().unwrap();

    let err = generate(&args(path, None, 1)).unwrap_err();
    assert!(format!("{err:#}").contains("Template must be a JSON object"));
}

#[test]
fn test_generate_missing_template() {
    let err = generate(&args("tests/fixtures/missing.json", None, 1)).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read template file"));
}

#[test]
fn test_check_prints_canonical_spec() {
    let mut out = Vec::new();
    run_check(
        &CheckArgs {
            spec: "integer in < 4 ,8 >".to_string(),
        },
        &mut out,
    )
    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "integer in <4,8>\n");
}

#[test]
fn test_check_rejects_unsupported_operator() {
    let mut out = Vec::new();
    let err = run_check(
        &CheckArgs {
            spec: "number >= 5".to_string(),
        },
        &mut out,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid number autofixture spec: 'number >= 5'"
    );
    assert!(out.is_empty());
}
