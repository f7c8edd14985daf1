//! Current User Use Case
//!
//! Loads the caller's own record plus the credited puzzle set. The
//! password hash stays inside the entity; the presentation layer never
//! serializes it.

use std::sync::Arc;

use crate::domain::entity::user::{PuzzleId, User, UserId};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Current user output
pub struct CurrentUserOutput {
    pub user: User,
    pub recently_solved: Vec<PuzzleId>,
}

/// Current user use case
pub struct CurrentUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<CurrentUserOutput> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let recently_solved = self.repo.solved_puzzle_ids(user_id).await?;

        Ok(CurrentUserOutput {
            user,
            recently_solved,
        })
    }
}
