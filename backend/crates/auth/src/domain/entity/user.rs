//! User Entity
//!
//! One record per account: credentials, the admin flag, and the progress
//! ledger the solving flow rewards into.

use chrono::{DateTime, Utc};
use kernel::id::{Id, markers};
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;
use crate::domain::value_object::password_reset::PasswordReset;
use crate::domain::value_object::progress::DifficultyBreakdown;

/// Typed user identifier
pub type UserId = Id<markers::User>;

/// Typed puzzle identifier (users track which puzzles they were credited for)
pub type PuzzleId = Id<markers::Puzzle>;

/// User entity
///
/// The password is only ever held as an Argon2id hash; the plaintext never
/// reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Case-folded, unique
    pub email: Email,
    pub password_hash: HashedPassword,
    /// Assigned at registration by comparing against the configured admin
    /// address; immutable afterwards
    pub is_admin: bool,
    /// Experience points, clamped at zero on deduction
    pub xp: i32,
    /// First-time solves, all difficulties
    pub puzzles_solved: i32,
    pub difficulty_breakdown: DifficultyBreakdown,
    /// Pending password reset, if any (single active token per user)
    pub pending_reset: Option<PasswordReset>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with an empty progress ledger.
    pub fn new(email: Email, password_hash: HashedPassword, is_admin: bool) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            is_admin,
            xp: 0,
            puzzles_solved: 0,
            difficulty_breakdown: DifficultyBreakdown::default(),
            pending_reset: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Start a password reset, overwriting any pending token.
    pub fn begin_password_reset(&mut self, ttl: std::time::Duration) -> PasswordReset {
        let reset = PasswordReset::issue(ttl);
        self.pending_reset = Some(reset.clone());
        self.updated_at = Utc::now();
        reset
    }

    /// Redeem a pending reset: replace the hash and clear token + expiry
    /// together.
    pub fn complete_password_reset(&mut self, new_hash: HashedPassword) {
        self.password_hash = new_hash;
        self.pending_reset = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn test_user() -> User {
        let hash = ClearTextPassword::new("secret1".to_string())
            .unwrap()
            .hash()
            .unwrap();
        User::new(Email::new("user@example.com").unwrap(), hash, false)
    }

    #[test]
    fn test_new_user_starts_at_zero() {
        let user = test_user();
        assert_eq!(user.xp, 0);
        assert_eq!(user.puzzles_solved, 0);
        assert_eq!(user.difficulty_breakdown.total(), 0);
        assert!(user.pending_reset.is_none());
        assert!(!user.is_admin);
    }

    #[test]
    fn test_begin_reset_overwrites_pending() {
        let mut user = test_user();
        let ttl = std::time::Duration::from_secs(3600);

        let first = user.begin_password_reset(ttl);
        let second = user.begin_password_reset(ttl);

        assert_ne!(first.token, second.token);
        assert_eq!(user.pending_reset.as_ref().unwrap().token, second.token);
    }

    #[test]
    fn test_complete_reset_clears_both_fields() {
        let mut user = test_user();
        user.begin_password_reset(std::time::Duration::from_secs(3600));

        let new_hash = ClearTextPassword::new("newsecret".to_string())
            .unwrap()
            .hash()
            .unwrap();
        user.complete_password_reset(new_hash.clone());

        assert!(user.pending_reset.is_none());
        assert_eq!(user.password_hash, new_hash);
    }
}
