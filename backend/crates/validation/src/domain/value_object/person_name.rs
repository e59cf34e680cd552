//! Person Name Value Object
//!
//! Given names ("nombres") and family names ("apellidos") share one rule set;
//! the field only changes the wording of error messages.
//!
//! ## Processing
//! NFC normalization → trim → validate. Decomposed accents (`e` + U+0301)
//! therefore count as a single letter.
//!
//! ## Invariants
//! - Length: 3 to 100 characters (after trimming)
//! - Characters: ASCII letters, `á é í ó ú ü ñ` and their uppercase forms,
//!   whitespace, `-` and `'`

use derive_more::Display;
use kernel::validation::{ValidationErrorKind, ValidationFailure};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

pub const PERSON_NAME_MIN_LENGTH: usize = 3;

pub const PERSON_NAME_MAX_LENGTH: usize = 100;

/// Spanish letters accepted besides `A-Z` / `a-z`
const SPANISH_LETTERS: &[char] = &[
    'á', 'é', 'í', 'ó', 'ú', 'ü', 'ñ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ü', 'Ñ',
];

/// Punctuation allowed inside compound names
const NAME_PUNCTUATION: &[char] = &['-', '\''];

// ============================================================================
// NameField
// ============================================================================

/// Which name field is being validated; `Display` gives the Spanish label
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameField {
    #[display("nombres")]
    #[serde(alias = "nombres")]
    Given,
    #[display("apellidos")]
    #[serde(alias = "apellidos")]
    Family,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonNameError {
    #[error("Los {field} son obligatorios")]
    Empty { field: NameField },

    #[error("Los {field} deben tener al menos {min} caracteres")]
    TooShort {
        field: NameField,
        length: usize,
        min: usize,
    },

    #[error("Los {field} no pueden superar los {max} caracteres")]
    TooLong {
        field: NameField,
        length: usize,
        max: usize,
    },

    #[error("Los {field} solo pueden contener letras, espacios, guiones y apóstrofes")]
    InvalidCharacter { field: NameField, char: char },
}

impl PersonNameError {
    pub fn field(&self) -> NameField {
        match self {
            Self::Empty { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::InvalidCharacter { field, .. } => *field,
        }
    }
}

impl ValidationFailure for PersonNameError {
    fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::Empty { .. } => ValidationErrorKind::Required,
            Self::TooShort { .. } => ValidationErrorKind::MinLength,
            Self::TooLong { .. } => ValidationErrorKind::MaxLength,
            Self::InvalidCharacter { .. } => ValidationErrorKind::Charset,
        }
    }
}

// ============================================================================
// PersonName Value Object
// ============================================================================

/// Validated, NFC-normalized and trimmed person name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct PersonName {
    field: NameField,
    value: String,
}

impl PersonName {
    pub fn new(input: impl AsRef<str>, field: NameField) -> Result<Self, PersonNameError> {
        let normalized: String = input.as_ref().nfc().collect();
        let value = normalized.trim();

        if value.is_empty() {
            return Err(PersonNameError::Empty { field });
        }

        let length = value.chars().count();
        if length < PERSON_NAME_MIN_LENGTH {
            return Err(PersonNameError::TooShort {
                field,
                length,
                min: PERSON_NAME_MIN_LENGTH,
            });
        }
        if length > PERSON_NAME_MAX_LENGTH {
            return Err(PersonNameError::TooLong {
                field,
                length,
                max: PERSON_NAME_MAX_LENGTH,
            });
        }

        if let Some(char) = value.chars().find(|&c| !Self::is_valid_char(c)) {
            return Err(PersonNameError::InvalidCharacter { field, char });
        }

        Ok(Self {
            field,
            value: value.to_string(),
        })
    }

    #[inline]
    pub fn field(&self) -> NameField {
        self.field
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphabetic()
            || c.is_whitespace()
            || SPANISH_LETTERS.contains(&c)
            || NAME_PUNCTUATION.contains(&c)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.value
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn test_trim() {
            let name = PersonName::new("  María  ", NameField::Given).unwrap();
            assert_eq!(name.as_str(), "María");
        }

        #[test]
        fn test_decomposed_accent_is_composed() {
            // "Jose" + COMBINING ACUTE ACCENT
            let name = PersonName::new("Jose\u{0301}", NameField::Given).unwrap();
            assert_eq!(name.as_str(), "José");
        }

        #[test]
        fn test_decomposed_accent_counts_once() {
            // "Ré" is two characters once composed
            assert!(matches!(
                PersonName::new("Re\u{0301}", NameField::Family),
                Err(PersonNameError::TooShort { length: 2, .. })
            ));
        }
    }

    mod length_validation {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert_eq!(
                PersonName::new("", NameField::Given),
                Err(PersonNameError::Empty {
                    field: NameField::Given
                })
            );
        }

        #[test]
        fn test_whitespace_only_is_required() {
            assert!(matches!(
                PersonName::new("   ", NameField::Family),
                Err(PersonNameError::Empty { .. })
            ));
        }

        #[test]
        fn test_too_short() {
            assert_eq!(
                PersonName::new("Al", NameField::Given),
                Err(PersonNameError::TooShort {
                    field: NameField::Given,
                    length: 2,
                    min: 3
                })
            );
        }

        #[test]
        fn test_minimum_length() {
            assert!(PersonName::new("Ana", NameField::Given).is_ok());
        }

        #[test]
        fn test_maximum_length() {
            let input = "a".repeat(PERSON_NAME_MAX_LENGTH);
            assert!(PersonName::new(&input, NameField::Family).is_ok());
        }

        #[test]
        fn test_too_long() {
            let input = "a".repeat(PERSON_NAME_MAX_LENGTH + 1);
            assert!(matches!(
                PersonName::new(&input, NameField::Family),
                Err(PersonNameError::TooLong { length: 101, .. })
            ));
        }

        #[test]
        fn test_short_with_digits_reports_length() {
            assert!(matches!(
                PersonName::new("A1", NameField::Given),
                Err(PersonNameError::TooShort { .. })
            ));
        }
    }

    mod character_validation {
        use super::*;

        #[test]
        fn test_compound_with_accents() {
            assert!(PersonName::new("José-María", NameField::Given).is_ok());
        }

        #[test]
        fn test_spanish_letters() {
            assert!(PersonName::new("Núñez Güemes", NameField::Family).is_ok());
            assert!(PersonName::new("ÁNGEL ÍÑIGO", NameField::Given).is_ok());
        }

        #[test]
        fn test_apostrophe() {
            assert!(PersonName::new("O'Connor", NameField::Family).is_ok());
        }

        #[test]
        fn test_digits_fail() {
            assert_eq!(
                PersonName::new("José123", NameField::Given),
                Err(PersonNameError::InvalidCharacter {
                    field: NameField::Given,
                    char: '1'
                })
            );
        }

        #[test]
        fn test_other_latin_letters_fail() {
            assert!(matches!(
                PersonName::new("François", NameField::Given),
                Err(PersonNameError::InvalidCharacter { char: 'ç', .. })
            ));
        }

        #[test]
        fn test_symbols_fail() {
            assert!(matches!(
                PersonName::new("Ana@Pérez", NameField::Family),
                Err(PersonNameError::InvalidCharacter { char: '@', .. })
            ));
        }
    }

    mod field_label {
        use super::*;

        #[test]
        fn test_messages_use_label() {
            let given = PersonName::new("", NameField::Given).unwrap_err();
            let family = PersonName::new("", NameField::Family).unwrap_err();
            assert_eq!(given.to_string(), "Los nombres son obligatorios");
            assert_eq!(family.to_string(), "Los apellidos son obligatorios");
        }

        #[test]
        fn test_same_rules_for_both_fields() {
            for input in ["", "Al", "José-María", "José123"] {
                let given = PersonName::new(input, NameField::Given).map_err(|e| e.kind());
                let family = PersonName::new(input, NameField::Family).map_err(|e| e.kind());
                assert_eq!(given.is_ok(), family.is_ok(), "{input}");
                assert_eq!(given.err(), family.err(), "{input}");
            }
        }

        #[test]
        fn test_error_field_accessor() {
            let err = PersonName::new("Al", NameField::Family).unwrap_err();
            assert_eq!(err.field(), NameField::Family);
        }

        #[test]
        fn test_deserialize_field() {
            let given: NameField = serde_json::from_str("\"given\"").unwrap();
            let family: NameField = serde_json::from_str("\"apellidos\"").unwrap();
            assert_eq!(given, NameField::Given);
            assert_eq!(family, NameField::Family);
            assert_eq!(NameField::Given.to_string(), "nombres");
            assert_eq!(NameField::Family.to_string(), "apellidos");
        }
    }
}
