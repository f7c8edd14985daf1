//! Domain Entities
//!
//! Core entities for the puzzle catalog.

use chrono::{DateTime, Utc};
use kernel::id::{Id, markers};

use crate::domain::value_objects::{Category, Difficulty};

/// Typed puzzle identifier
pub type PuzzleId = Id<markers::Puzzle>;

/// XP awarded for a first-time solve when the puzzle doesn't set its own
pub const DEFAULT_XP_REWARD: i32 = 100;

/// Puzzle entity
///
/// Created by an administrator. After creation the only mutation is the
/// `solved_count` increment on a first-ever correct solve; deletion is an
/// explicit admin action and terminal.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub puzzle_id: PuzzleId,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question: String,
    /// Canonical answer; may be numeric-looking ("42") or free text
    pub answer: String,
    /// Ordered hints, revealed one at a time by the solving page
    pub hints: Vec<String>,
    /// Solving time limit in minutes
    pub time_limit_minutes: i32,
    /// How many users have solved this puzzle (first-time solves only)
    pub solved_count: i32,
    pub xp_reward: i32,
    /// Marks "today's challenge" on the landing page
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields an administrator supplies when creating a puzzle
#[derive(Debug, Clone)]
pub struct NewPuzzle {
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question: String,
    pub answer: String,
    pub hints: Vec<String>,
    pub time_limit_minutes: i32,
    pub xp_reward: Option<i32>,
    pub featured: bool,
}

impl Puzzle {
    /// Create a new puzzle with a fresh id and zero solves.
    pub fn new(draft: NewPuzzle) -> Self {
        let now = Utc::now();

        Self {
            puzzle_id: PuzzleId::new(),
            title: draft.title,
            category: draft.category,
            difficulty: draft.difficulty,
            question: draft.question,
            answer: draft.answer,
            hints: draft.hints,
            time_limit_minutes: draft.time_limit_minutes,
            solved_count: 0,
            xp_reward: draft.xp_reward.unwrap_or(DEFAULT_XP_REWARD),
            featured: draft.featured,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewPuzzle {
        NewPuzzle {
            title: "Sum it up".to_string(),
            category: Category::Math,
            difficulty: Difficulty::Easy,
            question: "What is 6 x 7?".to_string(),
            answer: "42".to_string(),
            hints: vec!["It's even".to_string()],
            time_limit_minutes: 5,
            xp_reward: None,
            featured: false,
        }
    }

    #[test]
    fn test_new_puzzle_defaults() {
        let puzzle = Puzzle::new(draft());
        assert_eq!(puzzle.solved_count, 0);
        assert_eq!(puzzle.xp_reward, DEFAULT_XP_REWARD);
    }

    #[test]
    fn test_explicit_xp_reward_kept() {
        let puzzle = Puzzle::new(NewPuzzle {
            xp_reward: Some(250),
            ..draft()
        });
        assert_eq!(puzzle.xp_reward, 250);
    }
}
