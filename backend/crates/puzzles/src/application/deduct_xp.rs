//! Deduct XP Use Case
//!
//! Spends XP on a hint or solution reveal. Deliberately not idempotent:
//! every call deducts, and it is the client's job not to charge twice
//! for the same reveal. The balance is clamped at zero.

use std::sync::Arc;

use auth::models::{User, UserId};

use crate::domain::entities::PuzzleId;
use crate::domain::repository::SolveLedgerRepository;
use crate::error::{PuzzleError, PuzzleResult};

/// Deduct input
pub struct DeductXpInput {
    pub user_id: UserId,
    pub amount: i32,
}

/// Deduct output
pub struct DeductXpOutput {
    pub user: User,
    pub recently_solved: Vec<PuzzleId>,
}

/// Deduct XP use case
pub struct DeductXpUseCase<R>
where
    R: SolveLedgerRepository,
{
    repo: Arc<R>,
}

impl<R> DeductXpUseCase<R>
where
    R: SolveLedgerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: DeductXpInput) -> PuzzleResult<DeductXpOutput> {
        // A non-positive amount would mint XP through the clamp
        if input.amount <= 0 {
            return Err(PuzzleError::Validation(
                "Amount must be a positive number".to_string(),
            ));
        }

        let found = self.repo.deduct_xp(&input.user_id, input.amount).await?;
        if !found {
            return Err(PuzzleError::UserNotFound);
        }

        let user = self
            .repo
            .find_user(&input.user_id)
            .await?
            .ok_or(PuzzleError::UserNotFound)?;
        let recently_solved = self.repo.solved_puzzle_ids(&input.user_id).await?;

        tracing::debug!(
            user_id = %input.user_id,
            amount = input.amount,
            xp = user.xp,
            "XP deducted"
        );

        Ok(DeductXpOutput {
            user,
            recently_solved,
        })
    }
}
