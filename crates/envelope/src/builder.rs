use crate::envelope::{Envelope, ErrorDetail};
use crate::validation::ValidationErrors;
use http::StatusCode;
use std::fmt::Display;

/// What a handler wants reported in the `errors` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<T = serde_json::Value> {
    /// Field failures, reported as a field to message map.
    Validation(ValidationErrors),
    /// A generic error, reported through its description.
    Error(String),
    /// Reported verbatim.
    Value(T),
}

impl<T> Message<T> {
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }

    /// Captures the description of an error (or anything displayable).
    pub fn error<E: Display + ?Sized>(error: &E) -> Self {
        Self::Error(error.to_string())
    }

    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    fn into_detail(self) -> ErrorDetail<T> {
        match self {
            Self::Validation(errors) => ErrorDetail::Fields(errors.field_messages()),
            Self::Error(description) => ErrorDetail::Message(description),
            Self::Value(value) => ErrorDetail::Value(value),
        }
    }
}

impl<T> From<ValidationErrors> for Message<T> {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Builds the envelope for `code`. A missing message leaves `errors` out.
pub fn build_envelope<T>(code: StatusCode, message: Option<Message<T>>) -> Envelope<T> {
    Envelope::from_parts(code, message.map(Message::into_detail))
}

impl<T> Envelope<T> {
    pub fn new(code: StatusCode, message: Option<Message<T>>) -> Self {
        build_envelope(code, message)
    }

    pub fn builder(code: StatusCode) -> EnvelopeBuilder<T> {
        EnvelopeBuilder::new(code)
    }
}

pub struct EnvelopeBuilder<T> {
    code: StatusCode,
    message: Option<Message<T>>,
}

impl<T> EnvelopeBuilder<T> {
    pub fn new(code: StatusCode) -> Self {
        Self {
            code,
            message: None,
        }
    }

    pub fn message(mut self, message: Message<T>) -> Self {
        self.message = Some(message);
        self
    }

    pub fn validation(self, errors: ValidationErrors) -> Self {
        self.message(Message::Validation(errors))
    }

    pub fn error<E: Display + ?Sized>(self, error: &E) -> Self {
        self.message(Message::error(error))
    }

    pub fn value(self, value: T) -> Self {
        self.message(Message::Value(value))
    }

    pub fn build(self) -> Envelope<T> {
        build_envelope(self.code, self.message)
    }
}
