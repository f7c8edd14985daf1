//! List Puzzles Use Case

use std::sync::Arc;

use crate::domain::entities::Puzzle;
use crate::domain::repository::PuzzleRepository;
use crate::error::PuzzleResult;

/// List puzzles use case
pub struct ListPuzzlesUseCase<R>
where
    R: PuzzleRepository,
{
    repo: Arc<R>,
}

impl<R> ListPuzzlesUseCase<R>
where
    R: PuzzleRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All puzzles, newest first.
    pub async fn execute(&self) -> PuzzleResult<Vec<Puzzle>> {
        self.repo.list().await
    }
}
