//! Puzzle Routers
//!
//! Two routers come out of this crate: the catalog + solve routes
//! (mounted at `/api/puzzles`) and the XP ledger route (mounted at
//! `/api/users`). Both lean on the auth crate's bearer-token middleware.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

use auth::TokenService;
use auth::middleware::require_auth;

use crate::domain::repository::{PuzzleRepository, SolveLedgerRepository};
use crate::infra::postgres::PgPuzzleRepository;
use crate::presentation::handlers::{self, PuzzleAppState};

/// Create the puzzle router with the PostgreSQL repository
pub fn puzzle_router(repo: PgPuzzleRepository, tokens: TokenService) -> Router {
    puzzle_router_generic(repo, tokens)
}

/// Create a generic puzzle router for any repository implementation
pub fn puzzle_router_generic<R>(repo: R, tokens: TokenService) -> Router
where
    R: PuzzleRepository + SolveLedgerRepository + Clone + Send + Sync + 'static,
{
    let state = PuzzleAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new().route("/", get(handlers::list_puzzles::<R>));

    let protected = Router::new()
        .route("/", post(handlers::create_puzzle::<R>))
        .route("/{puzzle_id}/solve", post(handlers::solve_puzzle::<R>))
        .route("/{puzzle_id}", delete(handlers::delete_puzzle::<R>))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth));

    public.merge(protected).with_state(state)
}

/// Create the user-progress router (deduct-xp) with the PostgreSQL
/// repository
pub fn progress_router(repo: PgPuzzleRepository, tokens: TokenService) -> Router {
    progress_router_generic(repo, tokens)
}

/// Create a generic user-progress router for any repository
/// implementation
pub fn progress_router_generic<R>(repo: R, tokens: TokenService) -> Router
where
    R: PuzzleRepository + SolveLedgerRepository + Clone + Send + Sync + 'static,
{
    let state = PuzzleAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/deduct-xp", post(handlers::deduct_xp::<R>))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth))
        .with_state(state)
}
