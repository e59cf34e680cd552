//! Validation Router

use axum::{Router, routing::post};

use crate::presentation::handlers;

/// Create the validation router (stateless)
pub fn validation_router() -> Router {
    Router::new()
        .route("/identity-number", post(handlers::identity_number))
        .route("/email", post(handlers::email))
        .route("/username", post(handlers::username))
        .route("/person-name", post(handlers::person_name))
        .route("/user-form", post(handlers::user_form))
}
