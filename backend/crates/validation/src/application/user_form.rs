//! Validate User Form Use Case
//!
//! Runs every field validator of the user-management form and collects one
//! [`ValidationResult`] per field. Fields are independent: a failure in one
//! never hides the result of another.

use kernel::validation::ValidationResult;

use crate::domain::value_object::person_name::NameField;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserFormField {
    GivenNames,
    FamilyNames,
    Username,
    Email,
    IdentityNumber,
}

impl UserFormField {
    /// Wire name, matching the request DTO
    pub fn as_str(&self) -> &'static str {
        match self {
            UserFormField::GivenNames => "givenNames",
            UserFormField::FamilyNames => "familyNames",
            UserFormField::Username => "username",
            UserFormField::Email => "email",
            UserFormField::IdentityNumber => "identityNumber",
        }
    }
}

/// User form input
pub struct UserFormInput {
    pub given_names: String,
    pub family_names: String,
    pub username: String,
    pub email: String,
    /// `None` when the form does not edit the identity number
    pub identity_number: Option<String>,
}

/// User form output
///
/// The four always-present fields are held by name, so a result can never be
/// missing from the response.
#[derive(Debug, Clone)]
pub struct UserFormOutput {
    /// True iff every checked field is valid
    pub valid: bool,
    pub given_names: ValidationResult,
    pub family_names: ValidationResult,
    pub username: ValidationResult,
    pub email: ValidationResult,
    /// `None` if the field was not checked
    pub identity_number: Option<ValidationResult>,
}

impl UserFormOutput {
    /// Result for one field; `None` if the field was not checked
    pub fn get(&self, field: UserFormField) -> Option<&ValidationResult> {
        match field {
            UserFormField::GivenNames => Some(&self.given_names),
            UserFormField::FamilyNames => Some(&self.family_names),
            UserFormField::Username => Some(&self.username),
            UserFormField::Email => Some(&self.email),
            UserFormField::IdentityNumber => self.identity_number.as_ref(),
        }
    }

    /// Checked fields with their results, in form order
    pub fn fields(&self) -> impl Iterator<Item = (UserFormField, &ValidationResult)> {
        [
            UserFormField::GivenNames,
            UserFormField::FamilyNames,
            UserFormField::Username,
            UserFormField::Email,
            UserFormField::IdentityNumber,
        ]
        .into_iter()
        .filter_map(|field| self.get(field).map(|result| (field, result)))
    }

    /// Invalid fields with their messages, in form order
    pub fn errors(&self) -> impl Iterator<Item = (UserFormField, &str)> {
        self.fields()
            .filter_map(|(field, result)| result.error().map(|message| (field, message)))
    }
}

/// Validate user form use case
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateUserFormUseCase;

impl ValidateUserFormUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: UserFormInput) -> UserFormOutput {
        let mut output = UserFormOutput {
            valid: false,
            given_names: crate::validate_person_name(&input.given_names, NameField::Given),
            family_names: crate::validate_person_name(&input.family_names, NameField::Family),
            username: crate::validate_username(&input.username),
            email: crate::validate_email(&input.email),
            identity_number: input
                .identity_number
                .as_deref()
                .map(crate::validate_identity_number),
        };

        let failed: Vec<&str> = output
            .fields()
            .filter(|(_, result)| !result.is_valid())
            .map(|(field, _)| field.as_str())
            .collect();
        let checked = output.fields().count();
        output.valid = failed.is_empty();

        // Field values are personal data: only field names are logged
        tracing::debug!(checked, failed = ?failed, "User form validated");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::validation::ValidationErrorKind;

    fn valid_input() -> UserFormInput {
        UserFormInput {
            given_names: "José María".to_string(),
            family_names: "Pérez Núñez".to_string(),
            username: "jperez".to_string(),
            email: "jperez@example.com.ec".to_string(),
            identity_number: Some("1710034065".to_string()),
        }
    }

    #[test]
    fn test_all_valid() {
        let output = ValidateUserFormUseCase::new().execute(valid_input());
        assert!(output.valid);
        assert_eq!(output.fields().count(), 5);
        assert_eq!(output.errors().count(), 0);
    }

    #[test]
    fn test_collects_every_invalid_field() {
        let input = UserFormInput {
            given_names: "Al".to_string(),
            email: "a@b".to_string(),
            identity_number: Some("1234567890".to_string()),
            ..valid_input()
        };

        let output = ValidateUserFormUseCase::new().execute(input);
        assert!(!output.valid);

        let failed: Vec<UserFormField> = output.errors().map(|(field, _)| field).collect();
        assert_eq!(
            failed,
            vec![
                UserFormField::GivenNames,
                UserFormField::Email,
                UserFormField::IdentityNumber
            ]
        );
        assert_eq!(
            output.get(UserFormField::Email).and_then(|r| r.code()),
            Some(ValidationErrorKind::DomainFormat)
        );
        assert!(output.get(UserFormField::Username).unwrap().is_valid());
    }

    #[test]
    fn test_identity_number_skipped_when_absent() {
        let input = UserFormInput {
            identity_number: None,
            ..valid_input()
        };

        let output = ValidateUserFormUseCase::new().execute(input);
        assert!(output.valid);
        assert!(output.get(UserFormField::IdentityNumber).is_none());
        assert_eq!(output.fields().count(), 4);
    }

    #[test]
    fn test_required_fields_always_reported() {
        let input = UserFormInput {
            given_names: String::new(),
            family_names: String::new(),
            username: String::new(),
            email: String::new(),
            identity_number: None,
        };

        let output = ValidateUserFormUseCase::new().execute(input);
        assert!(!output.valid);
        for result in [
            &output.given_names,
            &output.family_names,
            &output.username,
            &output.email,
        ] {
            assert!(!result.is_valid());
            assert_eq!(result.code(), Some(ValidationErrorKind::Required));
        }
    }

    #[test]
    fn test_identity_number_empty_is_checked() {
        let input = UserFormInput {
            identity_number: Some(String::new()),
            ..valid_input()
        };

        let output = ValidateUserFormUseCase::new().execute(input);
        assert!(!output.valid);
        assert_eq!(
            output.get(UserFormField::IdentityNumber).and_then(|r| r.code()),
            Some(ValidationErrorKind::Length)
        );
    }

    #[test]
    fn test_family_names_message_uses_label() {
        let input = UserFormInput {
            family_names: String::new(),
            ..valid_input()
        };

        let output = ValidateUserFormUseCase::new().execute(input);
        let (_, message) = output.errors().next().unwrap();
        assert_eq!(message, "Los apellidos son obligatorios");
    }
}
