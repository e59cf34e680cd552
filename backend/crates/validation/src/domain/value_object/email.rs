//! Email Value Object
//!
//! Shape check only (`local@domain.tld`, ASCII). Whether the mailbox exists,
//! or is already registered, is the backend's business.

use kernel::validation::{ValidationErrorKind, ValidationFailure};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Maximum accepted length
pub const EMAIL_MAX_LENGTH: usize = 255;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("El correo electrónico es obligatorio")]
    Empty,

    #[error("El formato del correo electrónico no es válido")]
    InvalidFormat,

    #[error("El correo electrónico no puede superar los 255 caracteres")]
    TooLong { length: usize },

    #[error("El correo electrónico no puede contener puntos consecutivos")]
    ConsecutiveDots,

    #[error("El dominio del correo electrónico debe contener un punto (ejemplo: dominio.com)")]
    DomainWithoutDot,
}

impl ValidationFailure for EmailError {
    fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::Empty => ValidationErrorKind::Required,
            Self::InvalidFormat => ValidationErrorKind::Format,
            Self::TooLong { .. } => ValidationErrorKind::Length,
            Self::ConsecutiveDots => ValidationErrorKind::ConsecutiveDots,
            Self::DomainWithoutDot => ValidationErrorKind::DomainFormat,
        }
    }
}

/// Validated email address, stored exactly as entered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(input: impl AsRef<str>) -> Result<Self, EmailError> {
        let input = input.as_ref();
        Self::validate(input)?;
        Ok(Self(input.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part before `@`
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Part after `@`
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }

    fn validate(input: &str) -> Result<(), EmailError> {
        if input.trim().is_empty() {
            return Err(EmailError::Empty);
        }

        // `user@host` only misses the domain dot: it goes on to the length and
        // `..` rules and is rejected by the domain rule last
        if !EMAIL_PATTERN.is_match(input) && !Self::is_dotless_domain(input) {
            return Err(EmailError::InvalidFormat);
        }

        // Both shapes above only admit ASCII, so bytes == chars
        if input.len() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong {
                length: input.len(),
            });
        }

        if input.contains("..") {
            return Err(EmailError::ConsecutiveDots);
        }

        match input.split_once('@') {
            Some((_, domain)) if domain.contains('.') => Ok(()),
            _ => Err(EmailError::DomainWithoutDot),
        }
    }

    /// Well-formed except that the domain has no dot at all
    fn is_dotless_domain(input: &str) -> bool {
        let Some((local, domain)) = input.split_once('@') else {
            return false;
        };

        !local.is_empty()
            && local.chars().all(Self::is_local_char)
            && !domain.is_empty()
            && domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    }

    #[inline]
    fn is_local_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `<local>@b.com` with total length `len`
    fn email_of_length(len: usize) -> String {
        format!("{}@b.com", "a".repeat(len - "@b.com".len()))
    }

    #[test]
    fn test_email_valid() {
        assert!(Email::new("a@b.co").is_ok());
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.com.ec").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("first_last-1@sub-domain.example.org").is_ok());
    }

    #[test]
    fn test_email_preserves_case() {
        let email = Email::new("Ana.Perez@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Ana.Perez@Example.COM");
    }

    #[test]
    fn test_email_required() {
        assert_eq!(Email::new(""), Err(EmailError::Empty));
        assert_eq!(Email::new("   "), Err(EmailError::Empty));
    }

    #[test]
    fn test_email_invalid_format() {
        for input in [
            "userexample.com",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@example.c",
            "user@example.c0m",
            "usér@example.com",
            " user@example.com",
            "user name@example.com",
        ] {
            assert_eq!(Email::new(input), Err(EmailError::InvalidFormat), "{input}");
        }
    }

    #[test]
    fn test_email_dotless_domain() {
        assert_eq!(Email::new("a@b"), Err(EmailError::DomainWithoutDot));
        assert_eq!(Email::new("user@localhost"), Err(EmailError::DomainWithoutDot));
    }

    #[test]
    fn test_email_max_length() {
        assert!(Email::new(email_of_length(EMAIL_MAX_LENGTH)).is_ok());
        assert_eq!(
            Email::new(email_of_length(EMAIL_MAX_LENGTH + 1)),
            Err(EmailError::TooLong { length: 256 })
        );
    }

    #[test]
    fn test_email_consecutive_dots() {
        assert_eq!(Email::new("a..b@b.co"), Err(EmailError::ConsecutiveDots));
        assert_eq!(
            Email::new("user@example..com"),
            Err(EmailError::ConsecutiveDots)
        );
    }

    #[test]
    fn test_rule_order_length_before_dots() {
        let input = format!("a..{}", email_of_length(300));
        assert!(matches!(Email::new(&input), Err(EmailError::TooLong { .. })));
    }

    #[test]
    fn test_rule_order_format_before_length() {
        let input = "a".repeat(300);
        assert_eq!(Email::new(&input), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_rule_order_dotless_domain_checked_last() {
        assert_eq!(Email::new("a..b@b"), Err(EmailError::ConsecutiveDots));

        let input = format!("{}@b", "a".repeat(300));
        assert_eq!(
            Email::new(&input),
            Err(EmailError::TooLong { length: 302 })
        );
    }

    #[test]
    fn test_rule_order_format_before_dots() {
        // no TLD: the shape rule fires, not the dots rule
        assert_eq!(Email::new("a..b@b.c"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_email_parts() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(email.local_part(), "user");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_email_kinds() {
        assert_eq!(EmailError::Empty.kind(), ValidationErrorKind::Required);
        assert_eq!(
            EmailError::DomainWithoutDot.kind(),
            ValidationErrorKind::DomainFormat
        );
        assert_eq!(
            EmailError::ConsecutiveDots.kind(),
            ValidationErrorKind::ConsecutiveDots
        );
    }

    #[test]
    fn test_email_deserialize_invalid() {
        let result: Result<Email, _> = serde_json::from_str("\"a..b@b.co\"");
        assert!(result.is_err());
    }
}
