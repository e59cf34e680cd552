//! Value Object Module

pub mod email;
pub mod identity_number;
pub mod person_name;
pub mod username;
