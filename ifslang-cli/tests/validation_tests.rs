use ifslang_cli::validation::{
    ValidationContext, validate_context, validate_file_path, validate_language_code,
    validate_output_dir,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_validate_file_path_exists() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("export.xml");
    fs::write(&test_file, "<TranslationDb/>").unwrap();

    assert!(validate_file_path(test_file.to_str().unwrap()).is_ok());
}

#[test]
fn test_validate_file_path_not_exists() {
    let error = validate_file_path("nonexistent_export.xml").unwrap_err();
    assert!(error.contains("File does not exist"));
}

#[test]
fn test_validate_file_path_directory() {
    let temp_dir = TempDir::new().unwrap();
    let error = validate_file_path(temp_dir.path().to_str().unwrap()).unwrap_err();
    assert!(error.contains("Path is not a file"));
}

#[test]
fn test_validate_output_dir_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested").join("out");

    assert!(validate_output_dir(nested.to_str().unwrap()).is_ok());
    assert!(nested.is_dir());
}

#[test]
fn test_validate_output_dir_rejects_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("Log.txt");
    fs::write(&file, "").unwrap();

    let error = validate_output_dir(file.to_str().unwrap()).unwrap_err();
    assert!(error.contains("Output path is a file"));
}

#[test]
fn test_validate_language_code_valid() {
    for code in ["sv-SE", "nb-NO", "da-DK", "fi-FI", "de", "pt-PT"] {
        assert!(validate_language_code(code).is_ok(), "{} should be valid", code);
    }
}

#[test]
fn test_validate_language_code_invalid() {
    for code in ["", "und", "123", "sv-SE!", "-SE", "a"] {
        assert!(validate_language_code(code).is_err(), "{} should be invalid", code);
    }
}

#[test]
fn test_validate_context_reports_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    let xml = temp_dir.path().join("export.xml");
    fs::write(&xml, "<TranslationDb/>").unwrap();

    let ok = ValidationContext::new()
        .with_input_file(xml.to_str().unwrap())
        .with_output_dir(temp_dir.path().join("out").to_str().unwrap())
        .with_language_code("sv-SE");
    assert!(validate_context(&ok).is_ok());

    let bad_lang = ValidationContext::new()
        .with_input_file(xml.to_str().unwrap())
        .with_language_code("nb-NO")
        .with_language_code("??");
    let error = validate_context(&bad_lang).unwrap_err();
    assert!(error.starts_with("Language code validation failed"));

    let missing = ValidationContext::new().with_input_file("missing.xml");
    let error = validate_context(&missing).unwrap_err();
    assert!(error.starts_with("Input file 1 validation failed"));
}
