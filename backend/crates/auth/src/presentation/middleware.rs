//! Auth Middleware
//!
//! Verifies the `x-auth-token` bearer credential before handler logic
//! runs and stores the caller's identity in request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::token::{AuthUser, TOKEN_HEADER, TokenService};
use crate::error::AuthError;

/// Middleware that requires a valid bearer token.
///
/// On success the verified [`AuthUser`] is available to handlers via
/// `Extension<AuthUser>`. Admin checks stay in the handlers that need
/// them, matching where the API reports 401 for non-admins.
pub async fn require_auth(
    State(tokens): State<TokenService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(token) = token else {
        return Err(AuthError::MissingAuthToken.into_response());
    };

    let auth_user: AuthUser = match tokens.verify(token) {
        Ok(auth_user) => auth_user,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(auth_user);

    Ok(next.run(req).await)
}
