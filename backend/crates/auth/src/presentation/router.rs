//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use platform::mailer::Mailer;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the auth router with the PostgreSQL repository
pub fn auth_router<M>(repo: PgUserRepository, mailer: M, config: AuthConfig) -> Router
where
    M: Mailer + Clone + Send + Sync + 'static,
{
    auth_router_generic(repo, mailer, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R, M>(repo: R, mailer: M, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    M: Mailer + Clone + Send + Sync + 'static,
{
    let tokens = TokenService::new(&config);

    let state = AuthAppState {
        repo: Arc::new(repo),
        mailer: Arc::new(mailer),
        config: Arc::new(config),
        tokens: tokens.clone(),
    };

    let public = Router::new()
        .route("/register", post(handlers::register::<R, M>))
        .route("/login", post(handlers::login::<R, M>))
        .route("/forgot-password", post(handlers::forgot_password::<R, M>))
        .route("/reset-password", post(handlers::reset_password::<R, M>));

    let protected = Router::new()
        .route("/", get(handlers::current_user::<R, M>))
        .route_layer(middleware::from_fn_with_state(tokens, require_auth));

    public.merge(protected).with_state(state)
}
