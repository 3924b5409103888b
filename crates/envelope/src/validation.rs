use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, JSONSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

const REQUIRED_MESSAGE: &str = "This value is required.";
const EMAIL_MESSAGE: &str = "This is not a valid email.";

/// Field name given to schema failures about the document itself.
pub const ROOT_FIELD: &str = "_root";

/// A single field-level validation failure.
///
/// Implement this for the failure type of whatever validation library a
/// service uses so its results can be turned into [`ValidationErrors`].
pub trait FieldViolation {
    /// Name of the failing rule, e.g. `required` or `len`.
    fn tag(&self) -> &str;
    /// Identifier of the field that failed.
    fn field(&self) -> &str;
    /// Rule parameter, if the rule takes one (`6` in `len:6`).
    fn param(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub tag: String,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl FieldError {
    pub fn new(tag: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            field: field.into(),
            param: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }
}

impl FieldViolation for FieldError {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn field(&self) -> &str {
        &self.field
    }

    fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

/// Human-readable message for one failure.
pub fn violation_message<V: FieldViolation + ?Sized>(violation: &V) -> String {
    match violation.tag() {
        "required" => REQUIRED_MESSAGE.to_string(),
        "email" => EMAIL_MESSAGE.to_string(),
        tag => match violation.param().filter(|param| !param.is_empty()) {
            Some(param) => format!("This value failed validation on '{tag}:{param}'."),
            None => format!("This value failed validation on '{tag}'."),
        },
    }
}

/// Ordered collection of field failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the failures of any validation library, keeping their order.
    pub fn from_violations<I, V>(violations: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: FieldViolation,
    {
        violations
            .into_iter()
            .map(|v| FieldError {
                tag: v.tag().to_string(),
                field: v.field().to_string(),
                param: v.param().map(str::to_string),
            })
            .collect()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Field identifier to message. A field failing several rules keeps the
    /// message of its last failure.
    pub fn field_messages(&self) -> BTreeMap<String, String> {
        let mut messages = BTreeMap::new();
        for error in &self.0 {
            messages.insert(error.field.clone(), violation_message(error));
        }
        messages
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, violation_message(e)))
            .collect();
        write!(f, "validation failed: {}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Schema compilation failed: {message}")]
    CompilationFailed { message: String },
}

/// Validates JSON documents against a draft 7 schema and reports failures as
/// [`ValidationErrors`].
pub struct SchemaValidator {
    schema: JSONSchema,
}

impl SchemaValidator {
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema)
            .map_err(|e| SchemaError::CompilationFailed {
                message: e.to_string(),
            })?;

        Ok(Self { schema })
    }

    pub fn from_json_str(schema: &str) -> Result<Self, SchemaError> {
        let schema_value: Value =
            serde_json::from_str(schema).map_err(|e| SchemaError::CompilationFailed {
                message: format!("Failed to parse schema: {}", e),
            })?;
        Self::new(&schema_value)
    }

    pub fn validate(&self, instance: &Value) -> Result<(), ValidationErrors> {
        match self.schema.validate(instance) {
            Ok(()) => Ok(()),
            Err(errors) => Err(errors
                .map(|error| {
                    let path = error.instance_path.to_string();
                    let keyword = error.schema_path.to_string();
                    schema_failure(&error.kind, &path, &keyword)
                })
                .collect()),
        }
    }
}

fn schema_failure(kind: &ValidationErrorKind, instance_path: &str, schema_path: &str) -> FieldError {
    let field = field_from_pointer(instance_path);
    if let ValidationErrorKind::Required { property } = kind {
        let property = match property {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        };
        let field = if field.is_empty() {
            property
        } else {
            format!("{field}.{property}")
        };
        return FieldError::new("required", field);
    }

    let field = if field.is_empty() {
        ROOT_FIELD.to_string()
    } else {
        field
    };
    match kind {
        ValidationErrorKind::Format { format } => FieldError::new(format.to_string(), field),
        ValidationErrorKind::MinLength { limit } | ValidationErrorKind::MinItems { limit } => {
            FieldError::new("min", field).with_param(limit.to_string())
        }
        ValidationErrorKind::MaxLength { limit } | ValidationErrorKind::MaxItems { limit } => {
            FieldError::new("max", field).with_param(limit.to_string())
        }
        ValidationErrorKind::Minimum { limit } => {
            FieldError::new("gte", field).with_param(limit.to_string())
        }
        ValidationErrorKind::Maximum { limit } => {
            FieldError::new("lte", field).with_param(limit.to_string())
        }
        ValidationErrorKind::ExclusiveMinimum { limit } => {
            FieldError::new("gt", field).with_param(limit.to_string())
        }
        ValidationErrorKind::ExclusiveMaximum { limit } => {
            FieldError::new("lt", field).with_param(limit.to_string())
        }
        ValidationErrorKind::Pattern { pattern } => {
            FieldError::new("pattern", field).with_param(pattern.clone())
        }
        ValidationErrorKind::Enum { options } => {
            let options = match options {
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
                other => other.to_string(),
            };
            FieldError::new("oneof", field).with_param(options)
        }
        ValidationErrorKind::Constant { expected_value } => {
            FieldError::new("eq", field).with_param(expected_value.to_string())
        }
        _ => {
            let keyword = schema_path.rsplit('/').next().unwrap_or_default();
            FieldError::new(keyword, field)
        }
    }
}

fn field_from_pointer(pointer: &str) -> String {
    pointer
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
