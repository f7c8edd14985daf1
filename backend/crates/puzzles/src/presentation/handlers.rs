//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use std::sync::Arc;
use uuid::Uuid;

use auth::AuthUser;
use auth::models::UserResponse;

use crate::application::{
    CreatePuzzleUseCase, DeductXpInput, DeductXpUseCase, DeletePuzzleUseCase, ListPuzzlesUseCase,
    SolvePuzzleInput, SolvePuzzleUseCase,
};
use crate::domain::entities::{NewPuzzle, PuzzleId};
use crate::domain::repository::{PuzzleRepository, SolveLedgerRepository};
use crate::error::{PuzzleError, PuzzleResult};
use crate::presentation::dto::{
    CreatePuzzleRequest, DeductXpRequest, MessageResponse, PuzzleResponse, SolveRequest,
    SolveResponse,
};

/// Shared state for puzzle handlers
#[derive(Clone)]
pub struct PuzzleAppState<R>
where
    R: PuzzleRepository + SolveLedgerRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Catalog
// ============================================================================

/// GET /api/puzzles
pub async fn list_puzzles<R>(
    State(state): State<PuzzleAppState<R>>,
) -> PuzzleResult<Json<Vec<PuzzleResponse>>>
where
    R: PuzzleRepository + SolveLedgerRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPuzzlesUseCase::new(state.repo.clone());

    let puzzles = use_case.execute().await?;

    Ok(Json(puzzles.iter().map(PuzzleResponse::from).collect()))
}

/// POST /api/puzzles (admin only)
pub async fn create_puzzle<R>(
    State(state): State<PuzzleAppState<R>>,
    axum::Extension(auth_user): axum::Extension<AuthUser>,
    Json(req): Json<CreatePuzzleRequest>,
) -> PuzzleResult<Json<PuzzleResponse>>
where
    R: PuzzleRepository + SolveLedgerRepository + Clone + Send + Sync + 'static,
{
    if !auth_user.is_admin {
        return Err(PuzzleError::NotAuthorized);
    }

    let use_case = CreatePuzzleUseCase::new(state.repo.clone());

    let puzzle = use_case
        .execute(NewPuzzle {
            title: req.title,
            category: req.category,
            difficulty: req.difficulty,
            question: req.question,
            answer: req.answer,
            hints: req.hints,
            time_limit_minutes: req.time_limit,
            xp_reward: req.xp_reward,
            featured: req.featured,
        })
        .await?;

    Ok(Json(PuzzleResponse::from(&puzzle)))
}

/// DELETE /api/puzzles/{puzzle_id} (admin only)
pub async fn delete_puzzle<R>(
    State(state): State<PuzzleAppState<R>>,
    axum::Extension(auth_user): axum::Extension<AuthUser>,
    Path(puzzle_id): Path<Uuid>,
) -> PuzzleResult<Json<MessageResponse>>
where
    R: PuzzleRepository + SolveLedgerRepository + Clone + Send + Sync + 'static,
{
    if !auth_user.is_admin {
        return Err(PuzzleError::NotAuthorized);
    }

    let use_case = DeletePuzzleUseCase::new(state.repo.clone());

    use_case.execute(&PuzzleId::from_uuid(puzzle_id)).await?;

    Ok(Json(MessageResponse::new("Puzzle removed")))
}

// ============================================================================
// Solve
// ============================================================================

/// POST /api/puzzles/{puzzle_id}/solve
pub async fn solve_puzzle<R>(
    State(state): State<PuzzleAppState<R>>,
    axum::Extension(auth_user): axum::Extension<AuthUser>,
    Path(puzzle_id): Path<Uuid>,
    Json(req): Json<SolveRequest>,
) -> PuzzleResult<Json<SolveResponse>>
where
    R: PuzzleRepository + SolveLedgerRepository + Clone + Send + Sync + 'static,
{
    let use_case = SolvePuzzleUseCase::new(state.repo.clone());

    let output = use_case
        .execute(SolvePuzzleInput {
            user_id: auth_user.user_id,
            puzzle_id: PuzzleId::from_uuid(puzzle_id),
            answer: req.user_answer,
        })
        .await?;

    Ok(Json(SolveResponse {
        msg: "Correct!".to_string(),
        user: UserResponse::from_parts(&output.user, &output.recently_solved),
        puzzle: PuzzleResponse::from(&output.puzzle),
        already_credited: output.already_credited,
    }))
}

// ============================================================================
// XP deduction
// ============================================================================

/// POST /api/users/deduct-xp
pub async fn deduct_xp<R>(
    State(state): State<PuzzleAppState<R>>,
    axum::Extension(auth_user): axum::Extension<AuthUser>,
    Json(req): Json<DeductXpRequest>,
) -> PuzzleResult<Json<UserResponse>>
where
    R: PuzzleRepository + SolveLedgerRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeductXpUseCase::new(state.repo.clone());

    let output = use_case
        .execute(DeductXpInput {
            user_id: auth_user.user_id,
            amount: req.amount,
        })
        .await?;

    Ok(Json(UserResponse::from_parts(
        &output.user,
        &output.recently_solved,
    )))
}
