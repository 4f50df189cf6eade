//! Error values and value-model errors.
//!
//! `ErrorValue` is an error *object* inside the value model: the thing
//! classification sees when it inspects an error. `ValueError` is the
//! Rust-level error returned by the few fallible value constructors.

use std::fmt;
use thiserror::Error;

/// The kind of built-in error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// TypeError - type mismatch errors
    TypeError,
    /// ReferenceError - undefined variable access
    ReferenceError,
    /// SyntaxError - parse/syntax errors
    SyntaxError,
    /// RangeError - numeric range violations
    RangeError,
}

impl ErrorKind {
    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::RangeError => "RangeError",
        }
    }
}

/// An error object in the value model.
///
/// The name doubles as the visible constructor name, so user-defined
/// error subclasses carry their subclass name here while still stamping
/// the built-in "Error" tag.
///
/// # Examples
///
/// ```
/// use value_types::ErrorValue;
///
/// let err = ErrorValue::type_error("not a function");
/// assert_eq!(err.name(), "TypeError");
///
/// let custom = ErrorValue::subclass("ParseFailure", "bad input");
/// assert_eq!(custom.name(), "ParseFailure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    name: String,
    message: String,
}

impl ErrorValue {
    /// Create a generic error.
    pub fn new(message: impl Into<String>) -> Self {
        ErrorValue {
            name: ErrorKind::Error.name().to_string(),
            message: message.into(),
        }
    }

    /// Create an error of the given built-in kind.
    pub fn of_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorValue {
            name: kind.name().to_string(),
            message: message.into(),
        }
    }

    /// Create a TypeError.
    pub fn type_error(message: impl Into<String>) -> Self {
        ErrorValue::of_kind(ErrorKind::TypeError, message)
    }

    /// Create a RangeError.
    pub fn range_error(message: impl Into<String>) -> Self {
        ErrorValue::of_kind(ErrorKind::RangeError, message)
    }

    /// Create an instance of a user-defined error subclass. The subclass
    /// name becomes the visible constructor name.
    pub fn subclass(name: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorValue {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The error name (visible constructor name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

/// Errors from fallible value constructors.
///
/// Classification itself never fails; only building certain values can.
#[derive(Debug, Error)]
pub enum ValueError {
    /// A RegExp pattern or flag string could not be compiled.
    #[error("invalid regular expression /{pattern}/{flags}: {reason}")]
    InvalidRegExp {
        /// The rejected pattern.
        pattern: String,
        /// The rejected flag string.
        flags: String,
        /// Why compilation failed.
        reason: String,
    },
    /// A value has no JSON representation.
    #[error("value of type {type_tag} cannot be represented as JSON")]
    UnrepresentableJson {
        /// Slot tag of the offending value.
        type_tag: &'static str,
    },
}
