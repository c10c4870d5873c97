//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use auth::{AuthConfig, SqliteAuthRepository};
use base64::Engine;
use base64::engine::general_purpose;
use blog::{SqliteArticleRepository, blog_router};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,blog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .with_context(|| format!("failed to open database {database_url}"))?;

    tracing::info!(database_url = %database_url, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let auth_repo = SqliteAuthRepository::new(pool.clone());
    match auth_repo.purge_expired_sessions().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    let config = auth_config()?;
    let app = blog_router(auth_repo, SqliteArticleRepository::new(pool), config)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Session settings from the environment
///
/// Debug builds fall back to a random secret and insecure cookies.
/// `PASSWORD_PEPPER` must stay the same for existing passwords to verify.
fn auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").context("SESSION_SECRET must be set in production")?;
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, secret_b64.trim())?;
        let secret: [u8; 32] = secret_bytes
            .as_slice()
            .try_into()
            .context("SESSION_SECRET must decode to 32 bytes")?;
        AuthConfig::with_secret(secret)
    };

    if let Ok(pepper) = env::var("PASSWORD_PEPPER") {
        config = config.with_pepper(pepper);
    }

    if let Ok(value) = env::var("COOKIE_SECURE") {
        config.cookie_secure = value
            .parse()
            .context("COOKIE_SECURE must be true or false")?;
    }

    Ok(config)
}
