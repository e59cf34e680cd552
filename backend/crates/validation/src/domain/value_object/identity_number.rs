//! Identity Number (cédula) Value Object
//!
//! Ecuadorian national identity number for natural persons.
//!
//! ## Rules (checked in this order, first failure wins)
//! 1. Exactly 10 characters
//! 2. ASCII digits only
//! 3. First two digits are a province code in `01..=24`
//! 4. Third digit is below 6 (natural person)
//! 5. Last digit matches the modulus-10 check digit of the first nine
//!
//! Province code 30 (persons registered abroad) is rejected.

use kernel::validation::{ValidationErrorKind, ValidationFailure};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Number of digits in a cédula
pub const IDENTITY_NUMBER_LENGTH: usize = 10;

/// Lowest accepted province code
pub const PROVINCE_CODE_MIN: u8 = 1;

/// Highest accepted province code
pub const PROVINCE_CODE_MAX: u8 = 24;

/// Third digits at or above this value denote companies and public entities
pub const NATURAL_PERSON_DIGIT_LIMIT: u8 = 6;

/// Weights applied to the first nine digits
const COEFFICIENTS: [u32; 9] = [2, 1, 2, 1, 2, 1, 2, 1, 2];

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityNumberError {
    #[error("La cédula debe tener exactamente 10 dígitos")]
    InvalidLength { length: usize },

    #[error("La cédula solo debe contener números")]
    NonDigit,

    #[error("El código de provincia {code:02} no es válido (debe estar entre 01 y 24)")]
    InvalidProvince { code: u8 },

    #[error("El tercer dígito de la cédula ({digit}) no corresponde a una persona natural")]
    InvalidPersonType { digit: u8 },

    #[error("La cédula no es válida: el dígito verificador no coincide")]
    ChecksumMismatch { expected: u8, actual: u8 },
}

impl ValidationFailure for IdentityNumberError {
    fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::InvalidLength { .. } => ValidationErrorKind::Length,
            Self::NonDigit => ValidationErrorKind::Format,
            Self::InvalidProvince { .. } => ValidationErrorKind::Province,
            Self::InvalidPersonType { .. } => ValidationErrorKind::PersonType,
            Self::ChecksumMismatch { .. } => ValidationErrorKind::Checksum,
        }
    }
}

// ============================================================================
// Check digit
// ============================================================================

/// Compute the check digit for the first nine digits of a cédula.
///
/// Each digit is multiplied by its coefficient; products of 10 or more are
/// reduced by 9 (the sum of their two digits, since the maximum is 18).
/// The check digit is `10 - (sum % 10)`, or 0 when the sum is a multiple
/// of 10. Elements outside `0..=9` give a meaningless digit, never a panic.
///
/// ```rust
/// use validation::domain::value_object::identity_number::compute_check_digit;
///
/// assert_eq!(compute_check_digit(&[1, 7, 1, 0, 0, 3, 4, 0, 6]), 5);
/// ```
pub fn compute_check_digit(digits: &[u8; 9]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(COEFFICIENTS)
        .map(|(&digit, coefficient)| {
            let product = u32::from(digit) * coefficient;
            if product >= 10 { product - 9 } else { product }
        })
        .sum();

    match sum % 10 {
        0 => 0,
        remainder => (10 - remainder) as u8,
    }
}

// ============================================================================
// IdentityNumber Value Object
// ============================================================================

/// Validated cédula
///
/// # Invariants
/// - Exactly 10 ASCII digits
/// - Province code in `PROVINCE_CODE_MIN..=PROVINCE_CODE_MAX`
/// - Third digit below `NATURAL_PERSON_DIGIT_LIMIT`
/// - Last digit equals [`compute_check_digit`] of the first nine
///
/// Stored as text so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber(String);

impl IdentityNumber {
    pub fn new(input: impl AsRef<str>) -> Result<Self, IdentityNumberError> {
        let input = input.as_ref();
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit province code (1-24)
    pub fn province_code(&self) -> u8 {
        let digits = self.digits();
        digits[0] * 10 + digits[1]
    }

    /// Third digit (0-5 for natural persons)
    pub fn person_type_digit(&self) -> u8 {
        self.digits()[2]
    }

    /// Last digit
    pub fn check_digit(&self) -> u8 {
        self.digits()[IDENTITY_NUMBER_LENGTH - 1]
    }

    fn digits(&self) -> [u8; IDENTITY_NUMBER_LENGTH] {
        to_digits(&self.0)
    }

    fn validate(input: &str) -> Result<(), IdentityNumberError> {
        let length = input.chars().count();
        if length != IDENTITY_NUMBER_LENGTH {
            return Err(IdentityNumberError::InvalidLength { length });
        }

        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentityNumberError::NonDigit);
        }

        let digits = to_digits(input);

        let province = digits[0] * 10 + digits[1];
        if !(PROVINCE_CODE_MIN..=PROVINCE_CODE_MAX).contains(&province) {
            return Err(IdentityNumberError::InvalidProvince { code: province });
        }

        if digits[2] >= NATURAL_PERSON_DIGIT_LIMIT {
            return Err(IdentityNumberError::InvalidPersonType { digit: digits[2] });
        }

        let mut body = [0u8; 9];
        body.copy_from_slice(&digits[..9]);
        let expected = compute_check_digit(&body);
        let actual = digits[9];
        if expected != actual {
            return Err(IdentityNumberError::ChecksumMismatch { expected, actual });
        }

        Ok(())
    }
}

/// Caller guarantees `input` is exactly 10 ASCII digits.
fn to_digits(input: &str) -> [u8; IDENTITY_NUMBER_LENGTH] {
    let mut digits = [0u8; IDENTITY_NUMBER_LENGTH];
    for (slot, byte) in digits.iter_mut().zip(input.bytes()) {
        *slot = byte - b'0';
    }
    digits
}

impl FromStr for IdentityNumber {
    type Err = IdentityNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = IdentityNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<IdentityNumber> for String {
    fn from(value: IdentityNumber) -> Self {
        value.0
    }
}

// ============================================================================
// Tests
// ============================================================================
