//! # Error Types
//!
//! Structured error types for footing_core. The calculation itself never
//! fails (degenerate inputs propagate as NaN/Infinity); these errors cover the
//! layers around it: form edits, concrete grade lookup and JSON input files.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::errors::{CalcError, CalcResult};
//!
//! fn parse_depth(text: &str) -> CalcResult<f64> {
//!     text.trim().parse().map_err(|_| CalcError::InvalidInput {
//!         field: "totalH".to_string(),
//!         value: text.to_string(),
//!         reason: "Not a number".to_string(),
//!     })
//! }
//!
//! assert!(parse_depth("600").is_ok());
//! assert!(parse_depth("six hundred").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for footing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for footing_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be accepted (not a number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A form field is empty, so no complete input exists yet
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Concrete strength outside the enumerated strength classes
    #[error("Unknown concrete grade: {grade} (expected one of C16/20 .. C50/60)")]
    UnknownConcreteGrade { grade: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownConcreteGrade error
    pub fn unknown_grade(grade: impl Into<String>) -> Self {
        CalcError::UnknownConcreteGrade {
            grade: grade.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownConcreteGrade { .. } => "UNKNOWN_CONCRETE_GRADE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("msdx", "abc", "Not a number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("msdx").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_grade("22").error_code(), "UNKNOWN_CONCRETE_GRADE");
        assert_eq!(
            CalcError::file_error("read", "x.json", "not found").error_code(),
            "FILE_ERROR"
        );
    }

    #[test]
    fn test_display_names_field() {
        let error = CalcError::missing_field("totalH");
        assert_eq!(error.to_string(), "Missing required field: totalH");
    }
}
