//! Shared Kernel - Vocabulary shared by every crate in the workspace
//!
//! This crate contains:
//! - The application error type and its HTTP classification
//! - The validation result contract returned by every field validator
//!
//! Nothing here knows about concrete fields (cédula, email, ...). Those live
//! in the `validation` crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod validation;
