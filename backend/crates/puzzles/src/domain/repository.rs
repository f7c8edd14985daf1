//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::models::{User, UserId};

use crate::domain::entities::{Puzzle, PuzzleId};
use crate::domain::value_objects::Difficulty;
use crate::error::PuzzleResult;

/// Puzzle catalog repository trait
#[trait_variant::make(PuzzleRepository: Send)]
pub trait LocalPuzzleRepository {
    /// Create a new puzzle
    async fn create(&self, puzzle: &Puzzle) -> PuzzleResult<()>;

    /// List all puzzles, newest first
    async fn list(&self) -> PuzzleResult<Vec<Puzzle>>;

    /// Find puzzle by ID
    async fn find_by_id(&self, puzzle_id: &PuzzleId) -> PuzzleResult<Option<Puzzle>>;

    /// Delete a puzzle. Returns false if it didn't exist.
    async fn delete(&self, puzzle_id: &PuzzleId) -> PuzzleResult<bool>;
}

/// Solve ledger repository trait
///
/// Operations against the user progress ledger and the credited set.
#[trait_variant::make(SolveLedgerRepository: Send)]
pub trait LocalSolveLedgerRepository {
    /// Load the solving user
    async fn find_user(&self, user_id: &UserId) -> PuzzleResult<Option<User>>;

    /// Puzzle ids already credited to this user, most recent first
    async fn solved_puzzle_ids(&self, user_id: &UserId) -> PuzzleResult<Vec<PuzzleId>>;

    /// Credit a correct solve at most once, atomically.
    ///
    /// Inserts `(user, puzzle)` into the credited set; only when the pair
    /// was actually new are the aggregates touched, in the same
    /// transaction: puzzle solved-count, user solved-count, xp, and the
    /// difficulty histogram. Returns `true` when newly credited, `false`
    /// when the pair was already present (no mutation).
    async fn credit_solve(
        &self,
        user_id: &UserId,
        puzzle_id: &PuzzleId,
        xp_reward: i32,
        difficulty: Difficulty,
    ) -> PuzzleResult<bool>;

    /// Deduct XP, clamping the result at zero. Returns false if the user
    /// doesn't exist.
    async fn deduct_xp(&self, user_id: &UserId, amount: i32) -> PuzzleResult<bool>;
}
