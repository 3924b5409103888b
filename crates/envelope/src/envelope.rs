use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized response body carrying the status code, its reason phrase and
/// an optional error detail.
///
/// The fields are private so `status` can never drift from `code`; build one
/// with [`Envelope::new`], [`build_envelope`](crate::build_envelope) or
/// [`Envelope::builder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "response")]
pub struct Envelope<T = serde_json::Value> {
    code: u16,
    status: String,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    errors: Option<ErrorDetail<T>>,
}

/// Payload of the `errors` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail<T> {
    /// Field identifier to human-readable message, from a validation failure.
    Fields(BTreeMap<String, String>),
    /// Description of a generic error value.
    Message(String),
    /// Anything else, passed through verbatim.
    Value(T),
}

/// Standard reason phrase for `code`, or `""` when the code has none.
pub fn reason_phrase(code: StatusCode) -> &'static str {
    code.canonical_reason().unwrap_or("")
}

impl<T> Envelope<T> {
    pub(crate) fn from_parts(code: StatusCode, errors: Option<ErrorDetail<T>>) -> Self {
        Self {
            code: code.as_u16(),
            status: reason_phrase(code).to_string(),
            errors,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// The status code as an [`http::StatusCode`].
    pub fn status_code(&self) -> StatusCode {
        // `code` only ever comes from a StatusCode or a deserialized body.
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn errors(&self) -> Option<&ErrorDetail<T>> {
        self.errors.as_ref()
    }

    pub fn into_errors(self) -> Option<ErrorDetail<T>> {
        self.errors
    }
}

impl<T> ErrorDetail<T> {
    pub fn as_fields(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Fields(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}
