//! File record source against real files.

use std::fs;

use clientcheck_adapters::FileRecordSource;
use clientcheck_core::{
    application::{ApplicationError, ValidationService},
    domain::ValidationPolicy,
    error::CoreError,
    prelude::RecordSource,
};
use tempfile::TempDir;

const VALID_JSON: &str = r#"{
  "name": "Maria da Silva",
  "birthday": "15-06-1990",
  "email": "maria@example.com",
  "cpf": "123.456.789-00"
}"#;

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn loads_json_record() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "client.json", VALID_JSON);

    let record = FileRecordSource::new().load(&path).unwrap();
    assert_eq!(record.name, "Maria da Silva");
    assert_eq!(record.cpf, "123.456.789-00");
}

#[test]
fn loads_toml_record() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "client.toml",
        "name = \"Jo Silva\"\nbirthday = \"01-01-2000\"\nemail = \"jo@ex.com\"\ncpf = \"000.000.000-00\"\n",
    );

    let record = FileRecordSource::new().load(&path).unwrap();
    assert_eq!(record.birthday, "01-01-2000");
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = FileRecordSource::new()
        .load(&path.to_string_lossy())
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Application(ApplicationError::RecordNotFound { .. })
    ));
}

#[test]
fn malformed_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "client.json", "{ not json");

    let err = FileRecordSource::new().load(&path).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Application(ApplicationError::Malformed { .. })
    ));
}

#[test]
fn service_validates_file_records() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.json", VALID_JSON);
    let bad = write(&dir, "bad.json", &VALID_JSON.replace("15-06-1990", "31-02-2020"));

    let service = ValidationService::new(Box::new(FileRecordSource::new()), ValidationPolicy::default());

    assert!(service.validate_from(&good).is_ok());
    assert_eq!(
        service.validate_from(&bad).unwrap_err().to_string(),
        "A data de aniversário deve possuir o formato: DD-MM-YYYY e deve ser uma data válida."
    );
}
