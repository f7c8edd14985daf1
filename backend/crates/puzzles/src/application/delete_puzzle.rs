//! Delete Puzzle Use Case
//!
//! Terminal admin action. Credited-set rows referencing the puzzle go
//! with it; already-awarded XP stays with the users.

use std::sync::Arc;

use crate::domain::entities::PuzzleId;
use crate::domain::repository::PuzzleRepository;
use crate::error::{PuzzleError, PuzzleResult};

/// Delete puzzle use case
pub struct DeletePuzzleUseCase<R>
where
    R: PuzzleRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePuzzleUseCase<R>
where
    R: PuzzleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, puzzle_id: &PuzzleId) -> PuzzleResult<()> {
        let deleted = self.repo.delete(puzzle_id).await?;

        if !deleted {
            return Err(PuzzleError::PuzzleNotFound);
        }

        tracing::info!(puzzle_id = %puzzle_id, "Puzzle deleted");

        Ok(())
    }
}
