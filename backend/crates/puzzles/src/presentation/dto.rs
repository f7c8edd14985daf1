//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use auth::models::UserResponse;

use crate::domain::entities::Puzzle;
use crate::domain::value_objects::{Category, Difficulty};

// ============================================================================
// Catalog
// ============================================================================

/// A puzzle as the clients see it.
///
/// The canonical answer and the hint list ride along: the solving page
/// reveals hints locally and the admin panel edits everything in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResponse {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question: String,
    pub answer: String,
    pub hints: Vec<String>,
    /// Minutes
    pub time_limit: i32,
    pub solved_count: i32,
    pub xp_reward: i32,
    pub featured: bool,
}

impl From<&Puzzle> for PuzzleResponse {
    fn from(puzzle: &Puzzle) -> Self {
        Self {
            id: puzzle.puzzle_id.to_string(),
            title: puzzle.title.clone(),
            category: puzzle.category,
            difficulty: puzzle.difficulty,
            question: puzzle.question.clone(),
            answer: puzzle.answer.clone(),
            hints: puzzle.hints.clone(),
            time_limit: puzzle.time_limit_minutes,
            solved_count: puzzle.solved_count,
            xp_reward: puzzle.xp_reward,
            featured: puzzle.featured,
        }
    }
}

/// Create puzzle request (admin only)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePuzzleRequest {
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Minutes
    pub time_limit: i32,
    #[serde(default)]
    pub xp_reward: Option<i32>,
    #[serde(default)]
    pub featured: bool,
}

// ============================================================================
// Solve
// ============================================================================

/// Answer submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    #[serde(default)]
    pub user_answer: String,
}

/// Solve response: both updated records, so the client re-renders its
/// counters from persisted state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub msg: String,
    pub user: UserResponse,
    pub puzzle: PuzzleResponse,
    /// True when this user had already been credited for this puzzle
    pub already_credited: bool,
}

// ============================================================================
// XP deduction
// ============================================================================

/// Deduct XP request (hint/solution reveal cost)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductXpRequest {
    pub amount: i32,
}

/// Generic message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
