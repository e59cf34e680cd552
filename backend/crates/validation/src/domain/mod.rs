//! Domain Layer
//!
//! Value objects for the user-management form fields. Pure: no I/O, no
//! logging, no shared state.

pub mod value_object;

// Re-exports
pub use value_object::{
    email::{Email, EmailError},
    identity_number::{IdentityNumber, IdentityNumberError},
    person_name::{NameField, PersonName, PersonNameError},
    username::{Username, UsernameError},
};
