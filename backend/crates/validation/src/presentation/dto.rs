//! API DTOs (Data Transfer Objects)

use kernel::validation::ValidationResult;
use serde::{Deserialize, Serialize};

use crate::application::UserFormOutput;
use crate::domain::value_object::person_name::NameField;

// ============================================================================
// Single field
// ============================================================================

/// Body for the single-field endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateValueRequest {
    pub value: String,
}

/// Body for `/person-name`
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatePersonNameRequest {
    pub value: String,
    pub field: NameField,
}

// ============================================================================
// User form
// ============================================================================

/// User form request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFormRequest {
    pub given_names: String,
    pub family_names: String,
    pub username: String,
    pub email: String,
    /// Omitted on forms that do not edit the cédula
    #[serde(default)]
    pub identity_number: Option<String>,
}

/// Per-field results of the user form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFormFieldsResponse {
    pub given_names: ValidationResult,
    pub family_names: ValidationResult,
    pub username: ValidationResult,
    pub email: ValidationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_number: Option<ValidationResult>,
}

/// User form response
#[derive(Debug, Clone, Serialize)]
pub struct UserFormResponse {
    pub valid: bool,
    pub fields: UserFormFieldsResponse,
}

impl From<UserFormOutput> for UserFormResponse {
    fn from(output: UserFormOutput) -> Self {
        Self {
            valid: output.valid,
            fields: UserFormFieldsResponse {
                given_names: output.given_names,
                family_names: output.family_names,
                username: output.username,
                email: output.email,
                identity_number: output.identity_number,
            },
        }
    }
}
