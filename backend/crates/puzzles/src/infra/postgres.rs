//! PostgreSQL Repository Implementations
//!
//! The solve credit is one transaction around a conditional insert: the
//! credited-set row is the guard, and the aggregate updates only run when
//! that insert actually inserted.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use auth::models::{User, UserId};
use auth::{PgUserRepository, domain::repository::UserRepository};

use crate::domain::entities::{Puzzle, PuzzleId};
use crate::domain::repository::{PuzzleRepository, SolveLedgerRepository};
use crate::domain::value_objects::{Category, Difficulty};
use crate::error::{PuzzleError, PuzzleResult};

/// PostgreSQL-backed puzzle repository
#[derive(Clone)]
pub struct PgPuzzleRepository {
    pool: PgPool,
    users: PgUserRepository,
}

impl PgPuzzleRepository {
    pub fn new(pool: PgPool) -> Self {
        let users = PgUserRepository::new(pool.clone());
        Self { pool, users }
    }
}

// ============================================================================
// Puzzle Repository Implementation
// ============================================================================

impl PuzzleRepository for PgPuzzleRepository {
    async fn create(&self, puzzle: &Puzzle) -> PuzzleResult<()> {
        sqlx::query(
            r#"
            INSERT INTO puzzles (
                puzzle_id,
                title,
                category,
                difficulty,
                question,
                answer,
                hints,
                time_limit_minutes,
                solved_count,
                xp_reward,
                featured,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(puzzle.puzzle_id.as_uuid())
        .bind(&puzzle.title)
        .bind(puzzle.category.id())
        .bind(puzzle.difficulty.id())
        .bind(&puzzle.question)
        .bind(&puzzle.answer)
        .bind(&puzzle.hints)
        .bind(puzzle.time_limit_minutes)
        .bind(puzzle.solved_count)
        .bind(puzzle.xp_reward)
        .bind(puzzle.featured)
        .bind(puzzle.created_at)
        .bind(puzzle.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> PuzzleResult<Vec<Puzzle>> {
        let rows = sqlx::query_as::<_, PuzzleRow>(
            r#"
            SELECT
                puzzle_id,
                title,
                category,
                difficulty,
                question,
                answer,
                hints,
                time_limit_minutes,
                solved_count,
                xp_reward,
                featured,
                created_at,
                updated_at
            FROM puzzles
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_puzzle()).collect()
    }

    async fn find_by_id(&self, puzzle_id: &PuzzleId) -> PuzzleResult<Option<Puzzle>> {
        let row = sqlx::query_as::<_, PuzzleRow>(
            r#"
            SELECT
                puzzle_id,
                title,
                category,
                difficulty,
                question,
                answer,
                hints,
                time_limit_minutes,
                solved_count,
                xp_reward,
                featured,
                created_at,
                updated_at
            FROM puzzles
            WHERE puzzle_id = $1
            "#,
        )
        .bind(puzzle_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_puzzle()).transpose()
    }

    async fn delete(&self, puzzle_id: &PuzzleId) -> PuzzleResult<bool> {
        let deleted = sqlx::query("DELETE FROM puzzles WHERE puzzle_id = $1")
            .bind(puzzle_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Solve Ledger Repository Implementation
// ============================================================================

impl SolveLedgerRepository for PgPuzzleRepository {
    async fn find_user(&self, user_id: &UserId) -> PuzzleResult<Option<User>> {
        Ok(self.users.find_by_id(user_id).await?)
    }

    async fn solved_puzzle_ids(&self, user_id: &UserId) -> PuzzleResult<Vec<PuzzleId>> {
        Ok(self.users.solved_puzzle_ids(user_id).await?)
    }

    async fn credit_solve(
        &self,
        user_id: &UserId,
        puzzle_id: &PuzzleId,
        xp_reward: i32,
        difficulty: Difficulty,
    ) -> PuzzleResult<bool> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        // The credited-set insert is the idempotency guard: ON CONFLICT
        // DO NOTHING makes "was this pair new" a single atomic question.
        let inserted = sqlx::query(
            r#"
            INSERT INTO solved_puzzles (user_id, puzzle_id, solved_at)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(puzzle_id.as_uuid())
        .bind(now)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            // Already credited - leave every aggregate untouched
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"
            UPDATE puzzles SET
                solved_count = solved_count + 1,
                updated_at = $2
            WHERE puzzle_id = $1
            "#,
        )
        .bind(puzzle_id.as_uuid())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let user_update = match difficulty {
            Difficulty::Easy => {
                r#"
                UPDATE users SET
                    xp = xp + $2,
                    puzzles_solved = puzzles_solved + 1,
                    solved_easy = solved_easy + 1,
                    updated_at = $3
                WHERE user_id = $1
                "#
            }
            Difficulty::Medium => {
                r#"
                UPDATE users SET
                    xp = xp + $2,
                    puzzles_solved = puzzles_solved + 1,
                    solved_medium = solved_medium + 1,
                    updated_at = $3
                WHERE user_id = $1
                "#
            }
            Difficulty::Hard => {
                r#"
                UPDATE users SET
                    xp = xp + $2,
                    puzzles_solved = puzzles_solved + 1,
                    solved_hard = solved_hard + 1,
                    updated_at = $3
                WHERE user_id = $1
                "#
            }
        };

        sqlx::query(user_update)
            .bind(user_id.as_uuid())
            .bind(xp_reward)
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }

    async fn deduct_xp(&self, user_id: &UserId, amount: i32) -> PuzzleResult<bool> {
        // Clamp at zero in the same statement that deducts
        let updated = sqlx::query(
            r#"
            UPDATE users SET
                xp = GREATEST(0, xp - $2),
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(amount)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PuzzleRow {
    puzzle_id: Uuid,
    title: String,
    category: i16,
    difficulty: i16,
    question: String,
    answer: String,
    hints: Vec<String>,
    time_limit_minutes: i32,
    solved_count: i32,
    xp_reward: i32,
    featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PuzzleRow {
    fn into_puzzle(self) -> PuzzleResult<Puzzle> {
        let category = Category::from_id(self.category)
            .ok_or_else(|| PuzzleError::Internal(format!("Invalid category id: {}", self.category)))?;
        let difficulty = Difficulty::from_id(self.difficulty).ok_or_else(|| {
            PuzzleError::Internal(format!("Invalid difficulty id: {}", self.difficulty))
        })?;

        Ok(Puzzle {
            puzzle_id: PuzzleId::from_uuid(self.puzzle_id),
            title: self.title,
            category,
            difficulty,
            question: self.question,
            answer: self.answer,
            hints: self.hints,
            time_limit_minutes: self.time_limit_minutes,
            solved_count: self.solved_count,
            xp_reward: self.xp_reward,
            featured: self.featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
