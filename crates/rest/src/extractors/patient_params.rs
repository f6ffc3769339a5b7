//! Create-request parameter extractor.
//!
//! The create interaction takes the demographic fields as flat scalar
//! parameters (`family`, `given`, `dob`, `sex`, `address`, `phone`), either
//! in the query string or in an `application/x-www-form-urlencoded` body.

use axum::{
    Form,
    extract::{FromRequest, Query, Request},
    response::{IntoResponse, Response},
};
use demographics_persistence::PatientFields;
use http::header;
use serde::Deserialize;

use crate::error::RestError;

/// Axum extractor for create parameters.
///
/// Query-string values take precedence; a form body fills in whatever the
/// query string leaves out. `family`, `given`, `dob` and `sex` must be present
/// and non-blank.
///
/// # Example
///
/// ```rust,ignore
/// use demographics_rest::extractors::PatientParams;
///
/// async fn create_handler(PatientParams(fields): PatientParams) {
///     println!("Creating {} {}", fields.given_name, fields.family_name);
/// }
/// ```
#[derive(Debug)]
pub struct PatientParams(pub PatientFields);

/// Raw request parameters, before validation.
#[derive(Debug, Default, Deserialize)]
struct RawParams {
    family: Option<String>,
    given: Option<String>,
    dob: Option<String>,
    sex: Option<String>,
    address: Option<String>,
    phone: Option<String>,
}

impl RawParams {
    fn or(self, fallback: RawParams) -> RawParams {
        RawParams {
            family: self.family.or(fallback.family),
            given: self.given.or(fallback.given),
            dob: self.dob.or(fallback.dob),
            sex: self.sex.or(fallback.sex),
            address: self.address.or(fallback.address),
            phone: self.phone.or(fallback.phone),
        }
    }

    fn into_fields(self) -> Result<PatientFields, PatientParamsRejection> {
        let missing: Vec<&'static str> = [
            ("family", &self.family),
            ("given", &self.given),
            ("dob", &self.dob),
            ("sex", &self.sex),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(PatientParamsRejection::MissingParams(missing));
        }

        Ok(PatientFields {
            given_name: self.given.unwrap_or_default(),
            family_name: self.family.unwrap_or_default(),
            date_of_birth: self.dob.unwrap_or_default(),
            sex: self.sex.unwrap_or_default(),
            home_address: self.address,
            phone_number: self.phone,
        })
    }
}

/// Error type for create parameter extraction failures.
#[derive(Debug)]
pub enum PatientParamsRejection {
    /// The query string or form body could not be decoded.
    InvalidParams(String),
    /// Required parameters are absent or blank.
    MissingParams(Vec<&'static str>),
}

impl IntoResponse for PatientParamsRejection {
    fn into_response(self) -> Response {
        let error = match self {
            PatientParamsRejection::InvalidParams(msg) => {
                RestError::bad_request(format!("Invalid parameters: {}", msg))
            }
            PatientParamsRejection::MissingParams(names) => RestError::bad_request(format!(
                "Missing required parameters: {}",
                names.join(", ")
            )),
        };
        error.into_response()
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S> FromRequest<S> for PatientParams
where
    S: Send + Sync,
{
    type Rejection = PatientParamsRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(from_query) = Query::<RawParams>::try_from_uri(req.uri())
            .map_err(|e| PatientParamsRejection::InvalidParams(e.body_text()))?;

        let from_form = if is_form(&req) {
            let Form(params) = Form::<RawParams>::from_request(req, state)
                .await
                .map_err(|e| PatientParamsRejection::InvalidParams(e.body_text()))?;
            params
        } else {
            RawParams::default()
        };

        from_query.or(from_form).into_fields().map(PatientParams)
    }
}
