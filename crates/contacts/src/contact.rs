//! The contact value type.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A contact record.
///
/// Names are never empty. Deserialization applies the same checks as
/// [`Contact::new`] and additionally rejects negative or fractional ids, so a
/// `Contact` read from JSON is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactFields")]
pub struct Contact {
    pub(crate) id: u64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) star: bool,
}

impl Contact {
    /// Create a validated contact.
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        star: bool,
    ) -> Result<Self, ValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        if first_name.is_empty() {
            return Err(ValidationError::new("First name must not be empty"));
        }
        if last_name.is_empty() {
            return Err(ValidationError::new("Last name must not be empty"));
        }

        Ok(Self {
            id,
            first_name,
            last_name,
            star,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn star(&self) -> bool {
        self.star
    }

    /// The same contact stored under another id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

/// Wire form of a contact, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactFields {
    id: serde_json::Number,
    first_name: String,
    last_name: String,
    star: bool,
}

impl TryFrom<ContactFields> for Contact {
    type Error = ValidationError;

    fn try_from(fields: ContactFields) -> Result<Self, Self::Error> {
        let id = whole_id(&fields.id)?;
        Contact::new(id, fields.first_name, fields.last_name, fields.star)
    }
}

fn whole_id(id: &serde_json::Number) -> Result<u64, ValidationError> {
    if let Some(id) = id.as_u64() {
        return Ok(id);
    }
    match id.as_f64() {
        Some(value) if value < 0.0 => Err(ValidationError::new(format!(
            "Contact id must not be negative: {id}"
        ))),
        Some(value) if value.fract() == 0.0 && value <= u64::MAX as f64 => Ok(value as u64),
        _ => Err(ValidationError::new(format!(
            "Contact id must be a whole number: {id}"
        ))),
    }
}
