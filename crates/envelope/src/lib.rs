//! # Envelope Helper Crate
//!
//! This crate builds the uniform body that error responses carry: the status
//! code, its reason phrase and an optional `errors` detail. Validation
//! failures become a field to message map, generic errors become their
//! description and anything else is passed through untouched.
//!
//! ## Basic Usage
//!
//! ```rust
//! use envelope::*;
//! use http::StatusCode;
//!
//! let envelope = build_envelope::<serde_json::Value>(StatusCode::NOT_FOUND, None);
//! assert_eq!(envelope.code(), 404);
//! assert_eq!(envelope.status(), "Not Found");
//! assert!(envelope.errors().is_none());
//!
//! let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
//! let envelope = Envelope::<serde_json::Value>::new(
//!     StatusCode::INTERNAL_SERVER_ERROR,
//!     Some(Message::error(&err)),
//! );
//! assert_eq!(envelope.errors().and_then(ErrorDetail::as_message), Some("boom"));
//! ```
//!
//! ## Validation Errors
//!
//! ```rust
//! use envelope::*;
//! use http::StatusCode;
//!
//! let errors: ValidationErrors = vec![
//!     FieldError::new("required", "email"),
//!     FieldError::new("len", "code").with_param("6"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let envelope = Envelope::<serde_json::Value>::builder(StatusCode::BAD_REQUEST)
//!     .validation(errors)
//!     .build();
//!
//! let fields = envelope.errors().and_then(ErrorDetail::as_fields).unwrap();
//! assert_eq!(fields["email"], "This value is required.");
//! assert_eq!(fields["code"], "This value failed validation on 'len:6'.");
//! ```
//!
//! ## Schema Validation
//!
//! Request payloads can be checked against a JSON schema; the failures come
//! back as [`ValidationErrors`] ready to be reported.
//!
//! ```rust
//! use envelope::*;
//! use serde_json::json;
//!
//! let validator = SchemaValidator::new(&json!({
//!     "type": "object",
//!     "required": ["name"]
//! }))
//! .expect("Valid schema");
//!
//! let errors = validator.validate(&json!({})).unwrap_err();
//! assert_eq!(errors.field_messages()["name"], "This value is required.");
//! ```

mod builder;
mod envelope;
mod validation;

pub use builder::*;
pub use envelope::*;
pub use validation::*;
