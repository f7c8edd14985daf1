//! Perform Password Reset Use Case
//!
//! Redeems a reset token. The new password is validated first; the token
//! is then consumed in a single conditional update, which is what makes
//! it single-use.

use std::sync::Arc;

use chrono::Utc;
use platform::password::ClearTextPassword;

use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Perform reset input
pub struct PerformResetInput {
    pub token: String,
    pub password: String,
}

/// Perform reset use case
pub struct PerformResetUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> PerformResetUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: PerformResetInput) -> AuthResult<()> {
        // Password policy first, so a weak password doesn't burn the token
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let new_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Hash swap and token clear happen in one conditional update
        let user_id = self
            .repo
            .redeem_reset(&input.token, &new_hash, Utc::now())
            .await?
            .ok_or(AuthError::InvalidResetToken)?;

        tracing::info!(user_id = %user_id, "Password reset completed");

        Ok(())
    }
}
