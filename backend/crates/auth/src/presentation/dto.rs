//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::{PuzzleId, User};
use crate::domain::value_object::progress::DifficultyBreakdown;

// ============================================================================
// Register / Login
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Bearer token response, returned by both register and login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Password reset
// ============================================================================

/// Forgot password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reset password request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
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

// ============================================================================
// User record
// ============================================================================

/// The caller's user record, password omitted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
    pub xp: i32,
    pub puzzles_solved: i32,
    pub difficulty_breakdown: DifficultyBreakdown,
    /// Puzzle ids already credited to this user
    pub recently_solved: Vec<String>,
}

impl UserResponse {
    pub fn from_parts(user: &User, recently_solved: &[PuzzleId]) -> Self {
        Self {
            id: user.user_id.to_string(),
            email: user.email.as_str().to_string(),
            is_admin: user.is_admin,
            xp: user.xp,
            puzzles_solved: user.puzzles_solved,
            difficulty_breakdown: user.difficulty_breakdown,
            recently_solved: recently_solved.iter().map(|id| id.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::email::Email;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_user_response_never_carries_the_hash() {
        let hash = ClearTextPassword::new("secret1".to_string())
            .unwrap()
            .hash()
            .unwrap();
        let user = User::new(Email::new("user@example.com").unwrap(), hash, false);

        let response = UserResponse::from_parts(&user, &[]);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"isAdmin\":false"));
        assert!(json.contains("\"difficultyBreakdown\""));
    }
}
