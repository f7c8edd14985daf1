//! Platform - Infrastructure utilities
//!
//! Cross-domain building blocks with no business rules of their own:
//! - `password` - Argon2id hashing with zeroized cleartext handling
//! - `crypto` - secure randomness and hex tokens
//! - `mailer` - outbound mail delivery seam (HTTP mail API)

pub mod crypto;
pub mod mailer;
pub mod password;
