//! Field validation for the billing administration front-end
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, one per validated field
//! - `application/` - Use cases combining several fields
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Validators
//! | Function                     | Rules (first failure wins)                              |
//! |------------------------------|---------------------------------------------------------|
//! | [`validate_identity_number`] | length 10, digits, province 01-24, third digit < 6, check digit |
//! | [`validate_email`]           | required, shape, ≤ 255 chars, no `..`, dotted domain    |
//! | [`validate_username`]        | required, ≥ 4, ≤ 50, `[A-Za-z0-9_-]`                    |
//! | [`validate_person_name`]     | required, ≥ 3, ≤ 100, letters/space/`-`/`'`             |
//!
//! Every validator is a pure function. Failures are returned as
//! [`ValidationResult`] data carrying exactly one message.

pub mod application;
pub mod domain;
pub mod presentation;

use domain::value_object::{
    email::Email, identity_number::IdentityNumber, person_name::PersonName, username::Username,
};

// Re-exports for convenience
pub use application::{UserFormInput, UserFormOutput, ValidateUserFormUseCase};
pub use domain::value_object::person_name::NameField;
pub use presentation::router::validation_router;

// Re-export kernel types for unified error handling
pub use kernel::validation::{ValidationErrorKind, ValidationFailure, ValidationResult};

pub mod models {
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

/// Validate an Ecuadorian cédula (10 digits, province, person type, check digit).
///
/// ```rust
/// use validation::validate_identity_number;
///
/// assert!(validate_identity_number("1710034065").is_valid());
/// assert!(!validate_identity_number("1234567890").is_valid());
/// ```
pub fn validate_identity_number(value: &str) -> ValidationResult {
    ValidationResult::from_outcome(IdentityNumber::new(value))
}

/// Validate an email address (`local@domain.tld`, ASCII).
pub fn validate_email(value: &str) -> ValidationResult {
    ValidationResult::from_outcome(Email::new(value))
}

/// Validate a login username.
pub fn validate_username(value: &str) -> ValidationResult {
    ValidationResult::from_outcome(Username::new(value))
}

/// Validate given names or family names; `field` only changes the message.
pub fn validate_person_name(value: &str, field: NameField) -> ValidationResult {
    ValidationResult::from_outcome(PersonName::new(value, field))
}
