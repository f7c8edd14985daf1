//! Solve Puzzle Use Case
//!
//! The solve transaction: check the answer, then apply the at-most-once
//! reward. Crediting is delegated to the ledger repository's single
//! atomic conditional update, so two concurrent correct submissions for
//! the same pair cannot double-award.

use std::sync::Arc;

use auth::models::{User, UserId};

use crate::domain::entities::{Puzzle, PuzzleId};
use crate::domain::repository::{PuzzleRepository, SolveLedgerRepository};
use crate::domain::services::answer_matches;
use crate::error::{PuzzleError, PuzzleResult};

/// Solve input
pub struct SolvePuzzleInput {
    pub user_id: UserId,
    pub puzzle_id: PuzzleId,
    pub answer: String,
}

/// Solve output
///
/// Carries the reloaded records so the client can re-render its counters
/// from what was actually persisted.
pub struct SolvePuzzleOutput {
    /// True when the puzzle had already been credited to this user;
    /// aggregates were left untouched
    pub already_credited: bool,
    pub user: User,
    pub puzzle: Puzzle,
    pub recently_solved: Vec<PuzzleId>,
}

/// Solve puzzle use case
pub struct SolvePuzzleUseCase<R>
where
    R: PuzzleRepository + SolveLedgerRepository,
{
    repo: Arc<R>,
}

impl<R> SolvePuzzleUseCase<R>
where
    R: PuzzleRepository + SolveLedgerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SolvePuzzleInput) -> PuzzleResult<SolvePuzzleOutput> {
        let puzzle = self
            .repo
            .find_by_id(&input.puzzle_id)
            .await?
            .ok_or(PuzzleError::PuzzleNotFound)?;

        // The user must exist before we judge the answer
        self.repo
            .find_user(&input.user_id)
            .await?
            .ok_or(PuzzleError::UserNotFound)?;

        if input.answer.trim().is_empty() {
            return Err(PuzzleError::AnswerRequired);
        }

        // A wrong answer leaves both records untouched
        if !answer_matches(&puzzle.answer, &input.answer) {
            return Err(PuzzleError::IncorrectAnswer);
        }

        let newly_credited = self
            .repo
            .credit_solve(
                &input.user_id,
                &input.puzzle_id,
                puzzle.xp_reward,
                puzzle.difficulty,
            )
            .await?;

        if newly_credited {
            tracing::info!(
                user_id = %input.user_id,
                puzzle_id = %input.puzzle_id,
                xp_reward = puzzle.xp_reward,
                "Solve credited"
            );
        }

        // Reload both records after the mutation
        let user = self
            .repo
            .find_user(&input.user_id)
            .await?
            .ok_or(PuzzleError::UserNotFound)?;
        let puzzle = self
            .repo
            .find_by_id(&input.puzzle_id)
            .await?
            .ok_or(PuzzleError::PuzzleNotFound)?;
        let recently_solved = self.repo.solved_puzzle_ids(&input.user_id).await?;

        Ok(SolvePuzzleOutput {
            already_credited: !newly_credited,
            user,
            puzzle,
            recently_solved,
        })
    }
}
