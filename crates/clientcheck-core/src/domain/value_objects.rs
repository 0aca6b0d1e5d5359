//! Domain value objects: ClientField, ValidationPolicy.
//!
//! These are pure `Copy` value types compared by value.

use std::fmt;
use std::str::FromStr;

// ── ClientField ──────────────────────────────────────────────────────────────

/// A validated field of a client record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientField {
    Name,
    Birthday,
    Email,
    Cpf,
}

impl ClientField {
    /// Order in which the checkers run.
    pub const ORDER: [ClientField; 4] = [Self::Name, Self::Birthday, Self::Email, Self::Cpf];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Birthday => "birthday",
            Self::Email => "email",
            Self::Cpf => "cpf",
        }
    }
}

impl fmt::Display for ClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a field name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown client field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ClientField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "nome" => Ok(Self::Name),
            "birthday" | "birthdate" | "dob" => Ok(Self::Birthday),
            "email" | "e-mail" | "mail" => Ok(Self::Email),
            "cpf" => Ok(Self::Cpf),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

// ── ValidationPolicy ─────────────────────────────────────────────────────────

/// Switches that tighten checks beyond the format rules.
///
/// The default policy only applies the format rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Require correct CPF check digits, not just the `###.###.###-##` shape.
    pub verify_cpf_check_digits: bool,
}

impl ValidationPolicy {
    pub const fn strict() -> Self {
        Self {
            verify_cpf_check_digits: true,
        }
    }
}
