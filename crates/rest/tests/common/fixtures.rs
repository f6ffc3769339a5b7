//! Patient fixtures for REST API testing.

use serde::Serialize;
use serde_json::{Value, json};

/// Create parameters, serialized as query pairs or a form body.
#[derive(Debug, Clone, Serialize)]
pub struct PatientFixture {
    pub family: String,
    pub given: String,
    pub dob: String,
    pub sex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl PatientFixture {
    /// Creates a fixture with the required fields only.
    pub fn new(family: &str, given: &str, dob: &str, sex: &str) -> Self {
        Self {
            family: family.to_string(),
            given: given.to_string(),
            dob: dob.to_string(),
            sex: sex.to_string(),
            address: None,
            phone: None,
        }
    }

    /// Jane Doe, with every field set.
    pub fn jane_doe() -> Self {
        Self::new("Doe", "Jane", "1980-01-01", "F")
            .with_address("1 Main St")
            .with_phone("555-0100")
    }

    /// John Smith, required fields only.
    pub fn john_smith() -> Self {
        Self::new("Smith", "John", "1975-06-15", "M")
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Query pairs for `POST /patient/add`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("family", self.family.clone()),
            ("given", self.given.clone()),
            ("dob", self.dob.clone()),
            ("sex", self.sex.clone()),
        ];
        if let Some(address) = &self.address {
            pairs.push(("address", address.clone()));
        }
        if let Some(phone) = &self.phone {
            pairs.push(("phone", phone.clone()));
        }
        pairs
    }
}

/// A JSON replacement record for `PUT /patient/update/{id}`.
pub fn replacement_json(given: &str, family: &str, dob: &str) -> Value {
    json!({
        "givenName": given,
        "familyName": family,
        "dateOfBirth": dob,
        "sex": "X",
        "homeAddress": "2 Side St",
        "phoneNumber": "555-0199"
    })
}
