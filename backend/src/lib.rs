//! # Contoso Web API
//!
//! Serves user data to the single-page frontend.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, mappers)
//!     ↓
//! Domain Layer (UserService)
//!     ↓
//! Storage Layer (UserStorage trait, sqlite repository, migrations)
//! ```
//!
//! The schema is owned by the migration worker; the API only checks that it
//! is current when starting.

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::domain::UserService;
use crate::storage::migrations::{applied_versions, MIGRATIONS};
use crate::storage::{DbConnection, UserRepository};

/// Services shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub db: DbConnection,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        let repository = UserRepository::new(db.clone());
        Self {
            user_service: UserService::new(Arc::new(repository)),
            db,
        }
    }
}

/// Connect to the database and wire up the services
pub async fn initialize_backend(database: &DatabaseConfig) -> Result<AppState> {
    info!("Connecting to database");
    let db = DbConnection::new(&database.url).await?;

    let applied = applied_versions(db.pool()).await?;
    let pending = MIGRATIONS
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .count();
    if pending > 0 {
        warn!(
            "{} schema migration(s) pending; run contoso-migrator before serving traffic",
            pending
        );
    }

    Ok(AppState::new(db))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the Axum router with all routes configured
pub fn create_router(
    app_state: AppState,
    allowed_origins: &[String],
    static_dir: Option<&Path>,
) -> Router {
    let mut app = Router::new()
        .merge(io::rest::user_apis::router())
        .merge(io::rest::health_apis::router());

    if let Some(dir) = static_dir {
        info!("Serving frontend from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors_layer(allowed_origins)).with_state(app_state)
}

/// Fresh state over a migrated in-memory database
#[cfg(test)]
pub(crate) async fn test_state() -> Result<AppState> {
    let db = DbConnection::in_memory().await?;
    storage::migrations::run_migrations(db.pool()).await?;
    Ok(AppState::new(db))
}
