mod worker;

use contoso_api::config::DatabaseConfig;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use worker::RetryPolicy;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DatabaseConfig::load()?;

    info!("Migrating database...");
    let report = worker::run(&config, RetryPolicy::default()).await?;

    info!(
        "Migration finished: {} migration(s) applied, admin user {}",
        report.migrations_applied,
        if report.admin_created { "created" } else { "already present" }
    );
    Ok(())
}
