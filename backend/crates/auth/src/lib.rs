//! Auth (Accounts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases (register, login, reset lifecycle)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Email + password registration and login
//! - Signed, time-limited bearer tokens on the `x-auth-token` header
//! - Single designated admin, assigned by configured email at registration
//! - Time-boxed, single-use password reset tokens delivered by email
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in clear
//! - Login failures are uniform to prevent account enumeration
//! - Forgot-password always reports success, for the same reason

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{AuthUser, TOKEN_HEADER, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::auth_router;

pub mod models {
    pub use crate::domain::entity::user::*;
    pub use crate::domain::value_object::email::Email;
    pub use crate::domain::value_object::password_reset::PasswordReset;
    pub use crate::domain::value_object::progress::DifficultyBreakdown;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
