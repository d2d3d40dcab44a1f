//! Migrate-and-seed job run once before the web API starts.

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use contoso_api::config::DatabaseConfig;
use contoso_api::domain::models::NewUser;
use contoso_api::domain::UserService;
use contoso_api::storage::migrations::run_migrations;
use contoso_api::storage::DbConnection;
use contoso_api::AppState;
use tracing::{info, warn};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@local";

/// How often and how patiently to retry a failing step
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay before the second attempt; doubled after every failure
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_millis(500),
        }
    }
}

/// What a run changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrations_applied: usize,
    pub admin_created: bool,
}

/// Run `operation` until it succeeds or the policy gives up; the last error is returned
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, what: &str, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut delay = policy.initial_delay;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < policy.max_attempts => {
                warn!(
                    "{} failed (attempt {}/{}): {:#}; retrying in {:?}",
                    what, attempt, policy.max_attempts, e, delay
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => {
                return Err(e.context(format!("{} failed after {} attempts", what, attempt)))
            }
        }
    }
}

/// Ensure the admin account exists. Returns whether it had to be created.
pub async fn seed_data(user_service: &UserService) -> Result<bool> {
    let (admin, created) = user_service
        .ensure_user(NewUser::new(ADMIN_USERNAME, ADMIN_EMAIL))
        .await
        .context("Seeding admin user failed")?;

    if created {
        info!("Seeded admin user with id {}", admin.id);
    }
    Ok(created)
}

/// Migrate and seed an open database
pub async fn migrate_and_seed(db: &DbConnection, policy: RetryPolicy) -> Result<MigrationReport> {
    let migrations_applied =
        with_retry(policy, "Schema migration", || run_migrations(db.pool())).await?;

    let state = AppState::new(db.clone());
    let admin_created = seed_data(&state.user_service).await?;

    Ok(MigrationReport {
        migrations_applied,
        admin_created,
    })
}

/// Full job: connect, migrate, seed, disconnect
pub async fn run(config: &DatabaseConfig, policy: RetryPolicy) -> Result<MigrationReport> {
    let db = with_retry(policy, "Database connection", || DbConnection::new(&config.url)).await?;

    let report = migrate_and_seed(&db, policy).await;
    db.close().await;
    report
}
