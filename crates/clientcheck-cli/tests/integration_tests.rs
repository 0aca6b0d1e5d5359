//! End-to-end tests for the clientcheck binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BIRTHDAY_MESSAGE: &str =
    "A data de aniversário deve possuir o formato: DD-MM-YYYY e deve ser uma data válida.";
const NAME_MESSAGE: &str = "Nome do usuário não pode ter números ou caracteres especiais, exceto: hífen, aspas simples e ponto.";
const EMAIL_MESSAGE: &str = "Favor providenciar email no formato: 'email@provedor.extensao'.";
const CPF_CHECK_DIGITS_MESSAGE: &str = "CPF inválido: dígitos verificadores não conferem.";

/// A command isolated from any user config file.
fn clientcheck(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = Command::cargo_bin("clientcheck").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("CLIENTCHECK__VALIDATION__STRICT_CPF")
        .arg("--config")
        .arg(&config);
    cmd
}

fn validate_args<'a>(name: &'a str, birthday: &'a str, email: &'a str, cpf: &'a str) -> [&'a str; 9] {
    [
        "validate",
        "--name",
        name,
        "--birthday",
        birthday,
        "--email",
        email,
        "--cpf",
        cpf,
    ]
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_valid_record_from_flags() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(validate_args("Jo Silva", "15-06-1990", "user@ex.com", "123.456.789-00"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Client record is valid"));
}

#[test]
fn test_invalid_birthday_exits_with_user_error() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(validate_args("Jo Silva", "31-02-2020", "user@ex.com", "123.456.789-00"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains(BIRTHDAY_MESSAGE));
}

#[test]
fn test_single_word_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(validate_args("Jo", "15-06-1990", "user@ex.com", "123.456.789-00"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains(NAME_MESSAGE));
}

#[test]
fn test_only_first_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(validate_args("John123", "15-06-1990", "user@@ex", "12345678900"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains(NAME_MESSAGE))
        .stderr(predicate::str::contains(EMAIL_MESSAGE).not());
}

#[test]
fn test_valid_record_from_file() {
    let dir = TempDir::new().unwrap();
    let record = dir.path().join("client.json");
    fs::write(
        &record,
        r#"{"name":"Maria da Silva","birthday":"15-06-1990","email":"maria@ex.com","cpf":"123.456.789-00"}"#,
    )
    .unwrap();

    clientcheck(&dir)
        .arg("validate")
        .arg("--file")
        .arg(&record)
        .assert()
        .success();
}

#[test]
fn test_missing_record_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(["validate", "--file", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No client record found"));
}

#[test]
fn test_lenient_cpf_by_default() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(validate_args("Jo Silva", "15-06-1990", "user@ex.com", "123.456.789-00"))
        .assert()
        .success();
}

#[test]
fn test_strict_cpf_flag_checks_digits() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(validate_args("Jo Silva", "15-06-1990", "user@ex.com", "529.982.247-25"))
        .arg("--strict-cpf")
        .assert()
        .success()
        .stdout(predicate::str::contains("Client record is valid"));

    clientcheck(&dir)
        .args(validate_args("Jo Silva", "15-06-1990", "user@ex.com", "123.456.789-00"))
        .arg("--strict-cpf")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(CPF_CHECK_DIGITS_MESSAGE));
}

#[test]
fn test_strict_cpf_from_config_file_on_validate() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[validation]\nstrict_cpf = true\n").unwrap();

    clientcheck(&dir)
        .args(validate_args("Jo Silva", "15-06-1990", "user@ex.com", "529.982.247-25"))
        .assert()
        .success();

    clientcheck(&dir)
        .args(validate_args("Jo Silva", "15-06-1990", "user@ex.com", "123.456.789-00"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains(CPF_CHECK_DIGITS_MESSAGE));
}

#[test]
fn test_strict_cpf_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[validation]\nstrict_cpf = true\n").unwrap();

    clientcheck(&dir)
        .args(["check", "cpf", "123.456.789-00"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(CPF_CHECK_DIGITS_MESSAGE));

    clientcheck(&dir)
        .args(["check", "cpf", "529.982.247-25"])
        .assert()
        .success();
}

#[test]
fn test_strict_cpf_from_environment() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .env("CLIENTCHECK__VALIDATION__STRICT_CPF", "true")
        .args(["check", "cpf", "123.456.789-00"])
        .assert()
        .code(2);
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(["--output-format", "json", "check", "email", "user@@ex"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""valid": false"#))
        .stdout(predicate::str::contains(r#""field": "email""#));
}

#[test]
fn test_validate_json_output_on_success() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(["--output-format", "json"])
        .args(validate_args("Jo Silva", "15-06-1990", "user@ex.com", "123.456.789-00"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""valid": true"#));
}

#[test]
fn test_missing_config_file_is_configuration_error() {
    let mut cmd = Command::cargo_bin("clientcheck").unwrap();
    cmd.args(["--config", "/definitely/not/here.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_config_get() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(["config", "get", "validation.strict_cpf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("validation.strict_cpf = false"));
}

#[test]
fn test_quiet_flag() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .arg("-q")
        .args(validate_args("Jo Silva", "15-06-1990", "user@ex.com", "123.456.789-00"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_shell_completions() {
    let dir = TempDir::new().unwrap();
    clientcheck(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clientcheck"));
}
