//! Patient record types.
//!
//! This module defines the [`Patient`] record persisted in the `patients`
//! table, its store-assigned [`PatientId`], and [`PatientFields`], the six
//! demographic fields without identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Store-assigned identity of a patient record.
///
/// Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(i64);

impl PatientId {
    /// Wraps a raw identity value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identity value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for PatientId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A patient demographic record.
///
/// `id` is `None` until the record is first saved; the store assigns it
/// and never changes it afterwards.
///
/// # Examples
///
/// ```
/// use demographics_persistence::types::{Patient, PatientFields};
///
/// let patient = Patient::new(PatientFields {
///     given_name: "Jane".to_string(),
///     family_name: "Doe".to_string(),
///     date_of_birth: "1980-01-01".to_string(),
///     sex: "F".to_string(),
///     home_address: Some("1 Main St".to_string()),
///     phone_number: Some("555-0100".to_string()),
/// });
///
/// assert!(patient.id.is_none());
/// assert_eq!(patient.given_name, "Jane");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Store-assigned identity.
    pub id: Option<PatientId>,

    /// Given (first) name.
    pub given_name: String,

    /// Family (last) name.
    pub family_name: String,

    /// Date of birth, free-form.
    pub date_of_birth: String,

    /// Sex, free-form.
    pub sex: String,

    /// Home address.
    pub home_address: Option<String>,

    /// Phone number.
    pub phone_number: Option<String>,
}

impl Patient {
    /// Builds an unsaved patient from its demographic fields.
    pub fn new(fields: PatientFields) -> Self {
        let PatientFields {
            given_name,
            family_name,
            date_of_birth,
            sex,
            home_address,
            phone_number,
        } = fields;

        Self {
            id: None,
            given_name,
            family_name,
            date_of_birth,
            sex,
            home_address,
            phone_number,
        }
    }

    /// Overwrites all six demographic fields, keeping the identity.
    pub fn apply(&mut self, fields: PatientFields) {
        self.given_name = fields.given_name;
        self.family_name = fields.family_name;
        self.date_of_birth = fields.date_of_birth;
        self.sex = fields.sex;
        self.home_address = fields.home_address;
        self.phone_number = fields.phone_number;
    }

    /// Returns the demographic fields of this record.
    pub fn fields(&self) -> PatientFields {
        PatientFields {
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            sex: self.sex.clone(),
            home_address: self.home_address.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    /// Checks the required fields, returning the first blank one as an error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = missing_required(
            &self.given_name,
            &self.family_name,
            &self.date_of_birth,
            &self.sex,
        );
        match missing.first() {
            Some(field) => Err(ValidationError::MissingRequiredField {
                field: (*field).to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// The demographic fields of a patient, without identity.
///
/// Every field falls back to its default when absent from a JSON body, so a
/// partial body still deserializes and is rejected by validation instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientFields {
    /// Given (first) name.
    pub given_name: String,

    /// Family (last) name.
    pub family_name: String,

    /// Date of birth, free-form.
    pub date_of_birth: String,

    /// Sex, free-form.
    pub sex: String,

    /// Home address.
    pub home_address: Option<String>,

    /// Phone number.
    pub phone_number: Option<String>,
}

impl PatientFields {
    /// Returns the JSON names of required fields that are empty or whitespace.
    pub fn missing_required(&self) -> Vec<&'static str> {
        missing_required(
            &self.given_name,
            &self.family_name,
            &self.date_of_birth,
            &self.sex,
        )
    }
}

fn missing_required(
    given_name: &str,
    family_name: &str,
    date_of_birth: &str,
    sex: &str,
) -> Vec<&'static str> {
    [
        ("givenName", given_name),
        ("familyName", family_name),
        ("dateOfBirth", date_of_birth),
        ("sex", sex),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}
