//! Create Puzzle Use Case
//!
//! Admin-only catalog insertion. The admin check itself happens at the
//! presentation layer; this use case validates the puzzle content.

use std::sync::Arc;

use crate::domain::entities::{NewPuzzle, Puzzle};
use crate::domain::repository::PuzzleRepository;
use crate::error::{PuzzleError, PuzzleResult};

/// Create puzzle use case
pub struct CreatePuzzleUseCase<R>
where
    R: PuzzleRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePuzzleUseCase<R>
where
    R: PuzzleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, draft: NewPuzzle) -> PuzzleResult<Puzzle> {
        if draft.title.trim().is_empty() {
            return Err(PuzzleError::Validation("Title is required".to_string()));
        }
        if draft.question.trim().is_empty() {
            return Err(PuzzleError::Validation("Question is required".to_string()));
        }
        if draft.answer.trim().is_empty() {
            return Err(PuzzleError::Validation("Answer is required".to_string()));
        }
        if draft.time_limit_minutes <= 0 {
            return Err(PuzzleError::Validation(
                "Time limit must be a positive number of minutes".to_string(),
            ));
        }
        if draft.xp_reward.is_some_and(|xp| xp <= 0) {
            return Err(PuzzleError::Validation(
                "XP reward must be a positive number".to_string(),
            ));
        }

        let puzzle = Puzzle::new(draft);
        self.repo.create(&puzzle).await?;

        tracing::info!(
            puzzle_id = %puzzle.puzzle_id,
            difficulty = %puzzle.difficulty,
            "Puzzle created"
        );

        Ok(puzzle)
    }
}
