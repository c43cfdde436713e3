use ifslang::formats::header::encode_header;
use ifslang::formats::FileKind;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn ifslang_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ifslang"))
}

fn valid_translation() -> String {
    format!(
        "{}{}",
        encode_header(FileKind::Translation, "ESSPRO", "Cust", Some("sv-SE")),
        "CS:TestLU^LU\r\n\tCS:TEST_VIEW^LU\r\n\t\tCS:C_TEST_FIELD^LU\r\n\t\t\tP:Test Field^\r\n\t\t\tA:Prompt^Testfält^\r\n\t\tCE:\r\n\tCE:\r\nCE:\r\n"
    )
}

fn unclosed_translation() -> String {
    format!(
        "{}{}",
        encode_header(FileKind::Translation, "ESSPRO", "Cust", Some("nb-NO")),
        "CS:A^LU\r\nCS:B^LU\r\nCE:\r\n"
    )
}

#[test]
fn test_validate_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("Esspro_LU_LogicalUnit-Cust-sv.trs");
    fs::write(&file, valid_translation()).unwrap();

    let output = ifslang_cmd()
        .args(["validate", file.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(": OK (Validation: 0 errors, 0 warnings)"));
}

#[test]
fn test_validate_glob_json_reports_each_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("Esspro_LU_LogicalUnit-Cust-sv.trs"),
        valid_translation(),
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("Esspro_LU_LogicalUnit-Cust-no.trs"),
        unclosed_translation(),
    )
    .unwrap();

    let pattern = format!("{}/*.trs", temp_dir.path().display());
    let output = ifslang_cmd()
        .args(["validate", &pattern, "--json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["summary"]["files"], 2);
    assert_eq!(v["summary"]["invalid"], 1);

    let files = v["files"].as_array().unwrap();
    let bad = files
        .iter()
        .find(|f| f["file"].as_str().unwrap().ends_with("-no.trs"))
        .unwrap();
    assert_eq!(bad["valid"], false);
    let errors = bad["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().contains("CS 'A' not closed with CE"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: 1 of 2 files failed validation"));
}

#[test]
fn test_validate_reports_missing_and_unknown_files() {
    let temp_dir = TempDir::new().unwrap();
    let txt = temp_dir.path().join("notes.txt");
    fs::write(&txt, "hello").unwrap();

    let output = ifslang_cmd()
        .args(["validate", "missing.lng", txt.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error: File does not exist: missing.lng"));
    assert!(stdout.contains("error: Unknown file type: .txt"));
}

#[test]
fn test_validate_warnings_do_not_fail() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("Esspro_LU_LogicalUnit-Cust-sv.trs");
    let text = valid_translation().replace("\tCS:TEST_VIEW^LU", "  CS:TEST_VIEW^LU");
    fs::write(&file, text).unwrap();

    let output = ifslang_cmd()
        .args(["validate", file.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning: Line "));
    assert!(stdout.contains("Uses spaces instead of tabs for indentation"));
}

#[test]
fn test_validate_requires_input() {
    let output = ifslang_cmd().args(["validate"]).output().unwrap();
    assert!(!output.status.success());
}
