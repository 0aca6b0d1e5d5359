use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ClientField;

/// A client record as submitted by a caller.
///
/// Holds raw strings only; nothing here is checked until the record is run
/// through a [`FieldValidator`](crate::domain::FieldValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    /// Expected as `DD-MM-YYYY`.
    pub birthday: String,
    pub email: String,
    /// Expected as `000.000.000-00`.
    pub cpf: String,
}

impl ClientRecord {
    pub fn new(
        name: impl Into<String>,
        birthday: impl Into<String>,
        email: impl Into<String>,
        cpf: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
            email: email.into(),
            cpf: cpf.into(),
        }
    }

    /// Raw value of one field.
    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::Name => &self.name,
            ClientField::Birthday => &self.birthday,
            ClientField::Email => &self.email,
            ClientField::Cpf => &self.cpf,
        }
    }

    /// Field values in checker order: name, birthday, email, cpf.
    pub fn values(&self) -> [&str; 4] {
        ClientField::ORDER.map(|field| self.get(field))
    }
}
