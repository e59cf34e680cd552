//! Username Value Object
//!
//! Login handle for the administration system.
//!
//! ## Invariants
//! - Length: 4 to 50 characters
//! - Characters: `A-Z`, `a-z`, `0-9`, `_`, `-`
//!
//! Case is preserved; uniqueness is checked by the backend.

use kernel::validation::{ValidationErrorKind, ValidationFailure};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for username (in characters)
pub const USERNAME_MIN_LENGTH: usize = 4;

/// Maximum length for username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 50;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("El nombre de usuario es obligatorio")]
    Empty,

    #[error("El nombre de usuario debe tener al menos {min} caracteres")]
    TooShort { length: usize, min: usize },

    #[error("El nombre de usuario no puede superar los {max} caracteres")]
    TooLong { length: usize, max: usize },

    #[error(
        "El nombre de usuario solo puede contener letras, números, guiones y guiones bajos (carácter no permitido: '{char}')"
    )]
    InvalidCharacter { char: char, position: usize },
}

impl ValidationFailure for UsernameError {
    fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::Empty => ValidationErrorKind::Required,
            Self::TooShort { .. } => ValidationErrorKind::MinLength,
            Self::TooLong { .. } => ValidationErrorKind::MaxLength,
            Self::InvalidCharacter { .. } => ValidationErrorKind::Charset,
        }
    }
}

// ============================================================================
// Username Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(input: impl AsRef<str>) -> Result<Self, UsernameError> {
        let input = input.as_ref();
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(input: &str) -> Result<(), UsernameError> {
        if input.trim().is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = input.chars().count();
        if length < USERNAME_MIN_LENGTH {
            return Err(UsernameError::TooShort {
                length,
                min: USERNAME_MIN_LENGTH,
            });
        }
        if length > USERNAME_MAX_LENGTH {
            return Err(UsernameError::TooLong {
                length,
                max: USERNAME_MAX_LENGTH,
            });
        }

        if let Some((position, char)) = input
            .chars()
            .enumerate()
            .find(|&(_, c)| !Self::is_valid_char(c))
        {
            return Err(UsernameError::InvalidCharacter { char, position });
        }

        Ok(())
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    }
}

impl FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================
