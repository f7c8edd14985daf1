//! Progress Value Objects
//!
//! Counters the dashboard renders: how many puzzles a user has solved in
//! each difficulty tier.

use serde::{Deserialize, Serialize};

/// Per-difficulty solve counters.
///
/// Each field is non-negative and only ever incremented, once per
/// first-time solve of a puzzle at that difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBreakdown {
    pub easy: i32,
    pub medium: i32,
    pub hard: i32,
}

impl DifficultyBreakdown {
    pub fn total(&self) -> i32 {
        self.easy + self.medium + self.hard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let breakdown = DifficultyBreakdown::default();
        assert_eq!(breakdown.easy, 0);
        assert_eq!(breakdown.medium, 0);
        assert_eq!(breakdown.hard, 0);
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn test_total() {
        let breakdown = DifficultyBreakdown {
            easy: 2,
            medium: 1,
            hard: 4,
        };
        assert_eq!(breakdown.total(), 7);
    }
}
