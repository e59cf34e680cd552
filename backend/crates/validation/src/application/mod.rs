//! Application Layer
//!
//! Use cases composed from the domain validators.

pub mod user_form;

// Re-exports
pub use user_form::{UserFormField, UserFormInput, UserFormOutput, ValidateUserFormUseCase};
