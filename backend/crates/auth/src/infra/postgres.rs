//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::{PuzzleId, User, UserId};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::domain::value_object::password_reset::PasswordReset;
use crate::domain::value_object::progress::DifficultyBreakdown;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                password_hash,
                is_admin,
                xp,
                puzzles_solved,
                solved_easy,
                solved_medium,
                solved_hard,
                reset_token,
                reset_expires,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.is_admin)
        .bind(user.xp)
        .bind(user.puzzles_solved)
        .bind(user.difficulty_breakdown.easy)
        .bind(user.difficulty_breakdown.medium)
        .bind(user.difficulty_breakdown.hard)
        .bind(user.pending_reset.as_ref().map(|r| r.token.as_str()))
        .bind(user.pending_reset.as_ref().map(|r| r.expires_at))
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                is_admin,
                xp,
                puzzles_solved,
                solved_easy,
                solved_medium,
                solved_hard,
                reset_token,
                reset_expires,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                is_admin,
                xp,
                puzzles_solved,
                solved_easy,
                solved_medium,
                solved_hard,
                reset_token,
                reset_expires,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn solved_puzzle_ids(&self, user_id: &UserId) -> AuthResult<Vec<PuzzleId>> {
        let rows = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT puzzle_id
            FROM solved_puzzles
            WHERE user_id = $1
            ORDER BY solved_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PuzzleId::from_uuid).collect())
    }

    async fn store_reset(&self, user_id: &UserId, reset: &PasswordReset) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                reset_token = $2,
                reset_expires = $3,
                updated_at = $4
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(&reset.token)
        .bind(reset.expires_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn redeem_reset(
        &self,
        token: &str,
        new_hash: &HashedPassword,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<UserId>> {
        // One conditional update: the token is consumed in the same
        // statement that checks it, so it cannot be redeemed twice.
        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE users SET
                password_hash = $2,
                reset_token = NULL,
                reset_expires = NULL,
                updated_at = $3
            WHERE reset_token = $1 AND reset_expires > $3
            RETURNING user_id
            "#,
        )
        .bind(token)
        .bind(new_hash.as_phc_string())
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user_id.map(UserId::from_uuid))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
    is_admin: bool,
    xp: i32,
    puzzles_solved: i32,
    solved_easy: i32,
    solved_medium: i32,
    solved_hard: i32,
    reset_token: Option<String>,
    reset_expires: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        // Token and expiry are stored together or not at all
        let pending_reset = match (self.reset_token, self.reset_expires) {
            (Some(token), Some(expires_at)) => Some(PasswordReset::from_db(token, expires_at)),
            _ => None,
        };

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            password_hash,
            is_admin: self.is_admin,
            xp: self.xp,
            puzzles_solved: self.puzzles_solved,
            difficulty_breakdown: DifficultyBreakdown {
                easy: self.solved_easy,
                medium: self.solved_medium,
                hard: self.solved_hard,
            },
            pending_reset,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
