//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::entity::user::{PuzzleId, User, UserId};
use crate::domain::value_object::email::Email;
use crate::domain::value_object::password_reset::PasswordReset;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by case-folded email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Puzzle ids already credited to this user, most recent first
    async fn solved_puzzle_ids(&self, user_id: &UserId) -> AuthResult<Vec<PuzzleId>>;

    /// Store a pending reset, overwriting any previous one
    async fn store_reset(&self, user_id: &UserId, reset: &PasswordReset) -> AuthResult<()>;

    /// Redeem a reset token in one conditional update: replace the hash
    /// and clear token + expiry only where the token matches and has not
    /// expired. Returns the affected user, or `None` when no row matched.
    async fn redeem_reset(
        &self,
        token: &str,
        new_hash: &HashedPassword,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>>;
}
