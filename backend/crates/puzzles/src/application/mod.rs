//! Application Layer
//!
//! Use cases for the puzzle catalog and the solve/reward flow.

pub mod create_puzzle;
pub mod deduct_xp;
pub mod delete_puzzle;
pub mod list_puzzles;
pub mod solve_puzzle;

// Re-exports
pub use create_puzzle::CreatePuzzleUseCase;
pub use deduct_xp::{DeductXpInput, DeductXpOutput, DeductXpUseCase};
pub use delete_puzzle::DeletePuzzleUseCase;
pub use list_puzzles::ListPuzzlesUseCase;
pub use solve_puzzle::{SolvePuzzleInput, SolvePuzzleOutput, SolvePuzzleUseCase};
