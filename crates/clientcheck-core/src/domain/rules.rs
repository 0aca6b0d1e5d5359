//! Per-field checkers.
//!
//! Each checker is a plain `fn(&str) -> Result<(), ValidationError>` so it can
//! be stored in a [`Checker`] list and run positionally by
//! [`validate_properties`](crate::domain::validation::validate_properties).
//!
//! The user-facing messages are part of the public contract and are kept
//! verbatim in the `*_MESSAGE` constants.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::trace;

use crate::domain::{error::ValidationError, value_objects::ClientField};

/// A pure check over one field value.
pub type Checker = fn(&str) -> Result<(), ValidationError>;

pub const NAME_LENGTH_MESSAGE: &str = "Nome do usuário deve possuir 2 ou mais caracteres.";
pub const NAME_CHARACTERS_MESSAGE: &str = "Nome do usuário não pode ter números ou caracteres especiais, exceto: hífen, aspas simples e ponto.";
pub const BIRTHDAY_MESSAGE: &str =
    "A data de aniversário deve possuir o formato: DD-MM-YYYY e deve ser uma data válida.";
pub const EMAIL_MESSAGE: &str = "Favor providenciar email no formato: 'email@provedor.extensao'.";
pub const CPF_MESSAGE: &str = "Favor providenciar CPF no formato: '000.000.000-00'.";
pub const CPF_CHECK_DIGITS_MESSAGE: &str = "CPF inválido: dígitos verificadores não conferem.";

const NAME_MIN_CHARS: usize = 2;

/// Two or more alphabetic words joined by a space, hyphen, apostrophe, or
/// `. `/`, `. A lone word never matches.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[A-Za-z]+(?:[.,] |[-']| ))+[A-Za-z]+\.?\s*$").expect("Invalid name regex")
});

/// `local@label.label.tld`; labels are 1-63 chars without edge hyphens.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9]{2,12}$")
        .expect("Invalid email regex")
});

static CPF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").expect("Invalid CPF regex")
});

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < NAME_MIN_CHARS {
        return Err(ValidationError::new(ClientField::Name, NAME_LENGTH_MESSAGE));
    }

    if !NAME_REGEX.is_match(name) {
        return Err(ValidationError::new(
            ClientField::Name,
            NAME_CHARACTERS_MESSAGE,
        ));
    }

    Ok(())
}

/// Accepts `DD-MM-YYYY` (day and month may drop the leading zero) when it
/// names a real calendar date.
pub fn validate_birthday(birthday: &str) -> Result<(), ValidationError> {
    match parse_birthday(birthday) {
        Some(date) => {
            trace!(%date, "birthday parsed");
            Ok(())
        }
        None => Err(ValidationError::new(ClientField::Birthday, BIRTHDAY_MESSAGE)),
    }
}

/// Split on `-` into day, month, year and build the date as year-month-day.
fn parse_birthday(birthday: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = birthday.split('-').collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let day = parse_digits(day, 1..=2)?;
    let month = parse_digits(month, 1..=2)?;
    let year = parse_digits(year, 4..=4)?;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_digits(part: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new(ClientField::Email, EMAIL_MESSAGE));
    }
    Ok(())
}

pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if !CPF_REGEX.is_match(cpf) {
        return Err(ValidationError::new(ClientField::Cpf, CPF_MESSAGE));
    }
    Ok(())
}

/// Format check followed by modulo-11 check-digit verification.
pub fn validate_cpf_strict(cpf: &str) -> Result<(), ValidationError> {
    validate_cpf(cpf)?;

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();
    if !cpf_check_digits_match(&digits) {
        return Err(ValidationError::new(
            ClientField::Cpf,
            CPF_CHECK_DIGITS_MESSAGE,
        ));
    }

    Ok(())
}

/// `digits` must hold the 11 CPF digits in order.
///
/// Runs of a single repeated digit satisfy the arithmetic but are never
/// issued, so they are rejected.
fn cpf_check_digits_match(digits: &[u32]) -> bool {
    if digits.len() != 11 || digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let top_weight = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        rest => rest,
    }
}
