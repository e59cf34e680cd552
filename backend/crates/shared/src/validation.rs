//! Validation result contract
//!
//! Every field validator in the workspace answers with a [`ValidationResult`]:
//! `{"valid": true}` or `{"valid": false, "error": "...", "code": "..."}`.
//! A failure is data, never a panic or an `Err` the caller must unwrap.
//!
//! ## Taxonomy
//! [`ValidationErrorKind`] names which rule rejected the input. Typed
//! validator errors expose it through [`ValidationFailure`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule rejected a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    /// Empty or blank input
    Required,
    /// Exact length rule not met
    Length,
    MinLength,
    MaxLength,
    /// Input does not have the expected shape
    Format,
    /// Input contains a character outside the allowed set
    Charset,
    /// Cédula province code outside the accepted range
    Province,
    /// Cédula third digit is not a natural-person indicator
    PersonType,
    /// Cédula check digit mismatch
    Checksum,
    /// Email contains `..`
    ConsecutiveDots,
    /// Email domain has no dot
    DomainFormat,
}

impl ValidationErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::Length => "LENGTH",
            Self::MinLength => "MIN_LENGTH",
            Self::MaxLength => "MAX_LENGTH",
            Self::Format => "FORMAT",
            Self::Charset => "CHARSET",
            Self::Province => "PROVINCE",
            Self::PersonType => "PERSON_TYPE",
            Self::Checksum => "CHECKSUM",
            Self::ConsecutiveDots => "CONSECUTIVE_DOTS",
            Self::DomainFormat => "DOMAIN_FORMAT",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every typed validator error.
///
/// `Display` must produce the user-facing message; it is copied verbatim
/// into [`ValidationResult::error`].
pub trait ValidationFailure: std::error::Error {
    fn kind(&self) -> ValidationErrorKind;
}

/// Outcome of validating one field
///
/// # Invariants
/// - `valid == true` ⇔ `error.is_none()` ⇔ `code.is_none()`
/// - when present, `error` is non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<ValidationErrorKind>,
}

impl ValidationResult {
    /// Passing result
    #[inline]
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
            code: None,
        }
    }

    /// Failing result built from a typed validator error
    pub fn invalid<E: ValidationFailure + ?Sized>(failure: &E) -> Self {
        Self {
            valid: false,
            error: Some(failure.to_string()),
            code: Some(failure.kind()),
        }
    }

    /// Collapse a validator outcome, discarding the validated value.
    pub fn from_outcome<T, E: ValidationFailure>(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(_) => Self::valid(),
            Err(e) => Self::invalid(&e),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[inline]
    pub fn code(&self) -> Option<ValidationErrorKind> {
        self.code
    }
}
