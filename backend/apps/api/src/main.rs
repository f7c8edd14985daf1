//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; application-level errors use
//! `kernel::error::AppError`. All configuration is read from the
//! environment here, once, and passed down as explicit config structs.

use auth::{AuthConfig, PgUserRepository, TokenService, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use platform::mailer::HttpMailer;
use puzzles::{PgPuzzleRepository, progress_router, puzzle_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth::models::Email;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,puzzles=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let jwt_secret = if cfg!(debug_assertions) {
        env::var("JWT_SECRET").unwrap_or_else(|_| platform::crypto::random_token_hex(32))
    } else {
        env::var("JWT_SECRET").expect("JWT_SECRET must be set in production")
    };

    let admin_email = match env::var("ADMIN_EMAIL") {
        Ok(raw) => Some(Email::new(raw).expect("ADMIN_EMAIL must be a valid email address")),
        Err(_) => None,
    };

    let site_url =
        env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let auth_config = AuthConfig {
        jwt_secret,
        token_ttl: Duration::from_secs(10 * 3600),
        reset_token_ttl: Duration::from_secs(3600),
        admin_email,
        site_url,
    };

    let tokens = TokenService::new(&auth_config);

    // Outbound mail
    let mailer = HttpMailer::new(
        env::var("MAIL_API_URL").unwrap_or_else(|_| "http://localhost:8025/api/send".to_string()),
        env::var("MAIL_API_KEY").unwrap_or_default(),
        env::var("MAIL_FROM")
            .unwrap_or_else(|_| "\"Riddleworks\" <no-reply@riddleworks.local>".to_string()),
    );

    // Repositories
    let user_repo = PgUserRepository::new(pool.clone());
    let puzzle_repo = PgPuzzleRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(auth::TOKEN_HEADER),
        ]));

    // Build router
    let app = Router::new()
        .route("/", get(health))
        .nest("/api/auth", auth_router(user_repo, mailer, auth_config))
        .nest(
            "/api/puzzles",
            puzzle_router(puzzle_repo.clone(), tokens.clone()),
        )
        .nest("/api/users", progress_router(puzzle_repo, tokens))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "Riddleworks API is running"
}
