//! HTTP Handlers
//!
//! A failed validation is a successful request: handlers answer `200 OK`
//! with `valid: false`. Only unreadable bodies become [`AppError`]s.

use std::fmt;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use kernel::error::app_error::{AppError, AppResult};
use kernel::validation::ValidationResult;

use crate::application::{UserFormInput, ValidateUserFormUseCase};
use crate::presentation::dto::{
    UserFormRequest, UserFormResponse, ValidatePersonNameRequest, ValidateValueRequest,
};

/// Unwrap a JSON body or turn the rejection into a problem-details error
fn accept<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(AppError::from(rejection))
        }
    }
}

fn respond(field: impl fmt::Display, result: ValidationResult) -> Json<ValidationResult> {
    tracing::debug!(
        field = %field,
        valid = result.is_valid(),
        code = ?result.code(),
        "Field validated"
    );
    Json(result)
}

// ============================================================================
// Single field
// ============================================================================

/// POST /api/validation/identity-number
pub async fn identity_number(
    payload: Result<Json<ValidateValueRequest>, JsonRejection>,
) -> AppResult<Json<ValidationResult>> {
    let req = accept(payload)?;
    Ok(respond(
        "identity_number",
        crate::validate_identity_number(&req.value),
    ))
}

/// POST /api/validation/email
pub async fn email(
    payload: Result<Json<ValidateValueRequest>, JsonRejection>,
) -> AppResult<Json<ValidationResult>> {
    let req = accept(payload)?;
    Ok(respond("email", crate::validate_email(&req.value)))
}

/// POST /api/validation/username
pub async fn username(
    payload: Result<Json<ValidateValueRequest>, JsonRejection>,
) -> AppResult<Json<ValidationResult>> {
    let req = accept(payload)?;
    Ok(respond("username", crate::validate_username(&req.value)))
}

/// POST /api/validation/person-name
pub async fn person_name(
    payload: Result<Json<ValidatePersonNameRequest>, JsonRejection>,
) -> AppResult<Json<ValidationResult>> {
    let req = accept(payload)?;
    Ok(respond(
        req.field,
        crate::validate_person_name(&req.value, req.field),
    ))
}

// ============================================================================
// User form
// ============================================================================

/// POST /api/validation/user-form
pub async fn user_form(
    payload: Result<Json<UserFormRequest>, JsonRejection>,
) -> AppResult<Json<UserFormResponse>> {
    let req = accept(payload)?;

    let input = UserFormInput {
        given_names: req.given_names,
        family_names: req.family_names,
        username: req.username,
        email: req.email,
        identity_number: req.identity_number,
    };

    let output = ValidateUserFormUseCase::new().execute(input);

    Ok(Json(output.into()))
}
