use std::fmt;

/// Name under which item errors are reported, used as the middle segment of
/// resolved message codes (`range.item.price`).
pub const ITEM_OBJECT_NAME: &str = "item";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorTarget {
    Field(String),
    Object,
}

/// Positional argument interpolated into a message template as `{0}`, `{1}`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorArgument {
    Int(i64),
    Text(String),
}

impl fmt::Display for ErrorArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorArgument::Int(value) => write!(f, "{}", value),
            ErrorArgument::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for ErrorArgument {
    fn from(value: i64) -> Self {
        ErrorArgument::Int(value)
    }
}

impl From<i32> for ErrorArgument {
    fn from(value: i32) -> Self {
        ErrorArgument::Int(value.into())
    }
}

impl From<&str> for ErrorArgument {
    fn from(value: &str) -> Self {
        ErrorArgument::Text(value.to_string())
    }
}

/// A single field-level or object-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub object_name: String,
    pub target: ErrorTarget,
    pub code: String,
    pub arguments: Vec<ErrorArgument>,
    pub rejected_value: Option<String>,
}

impl ValidationError {
    pub fn field(field: &str, code: &str, arguments: Vec<ErrorArgument>) -> Self {
        Self {
            object_name: ITEM_OBJECT_NAME.to_string(),
            target: ErrorTarget::Field(field.to_string()),
            code: code.to_string(),
            arguments,
            rejected_value: None,
        }
    }

    pub fn object(code: &str, arguments: Vec<ErrorArgument>) -> Self {
        Self {
            object_name: ITEM_OBJECT_NAME.to_string(),
            target: ErrorTarget::Object,
            code: code.to_string(),
            arguments,
            rejected_value: None,
        }
    }

    pub fn with_rejected_value(mut self, value: Option<String>) -> Self {
        self.rejected_value = value;
        self
    }

    pub fn field_name(&self) -> Option<&str> {
        match &self.target {
            ErrorTarget::Field(name) => Some(name),
            ErrorTarget::Object => None,
        }
    }

    pub fn is_global(&self) -> bool {
        self.target == ErrorTarget::Object
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(",");
        match &self.target {
            ErrorTarget::Field(name) => write!(
                f,
                "Field error in object '{}' on field '{}': code [{}]; arguments [{}]; rejected value [{}]",
                self.object_name,
                name,
                self.code,
                arguments,
                self.rejected_value.as_deref().unwrap_or("null"),
            ),
            ErrorTarget::Object => write!(
                f,
                "Error in object '{}': code [{}]; arguments [{}]",
                self.object_name, self.code, arguments,
            ),
        }
    }
}

/// Ordered errors collected while binding and validating one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field_name() == Some(field))
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.field_errors(field).next().is_some()
    }

    pub fn global_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.is_global())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} errors", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n{}", error)?;
        }
        Ok(())
    }
}
