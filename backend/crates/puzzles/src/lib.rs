//! Puzzles Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Puzzle entity, classification enums, answer checking,
//!   repository traits
//! - `application/` - Use cases (catalog CRUD, solve transaction, XP
//!   deduction)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Reward Model
//! - A correct answer credits XP and counters at most once per
//!   (user, puzzle) pair; the credited set is the sole idempotency record
//! - Crediting and the puzzle solve-counter share one transaction guarded
//!   by a conditional insert, so concurrent submissions cannot double-award
//! - Incorrect submissions mutate nothing

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PuzzleError, PuzzleResult};
pub use infra::postgres::PgPuzzleRepository;
pub use presentation::router::{progress_router, puzzle_router};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
