//! Versioned schema migrations.
//!
//! Each migration runs in its own transaction and is recorded in
//! `schema_migrations`, so applying the list again only runs what is new.

use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};
use tracing::info;

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

/// All migrations in the order they must be applied
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_users",
    sql: r#"
        CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL
        );
    "#,
}];

async fn ensure_history_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Versions already applied, ascending
pub async fn applied_versions(pool: &SqlitePool) -> Result<Vec<i64>> {
    ensure_history_table(pool).await?;

    let rows = sqlx::query("SELECT version FROM schema_migrations ORDER BY version ASC")
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(|row| row.get("version")).collect())
}

/// Apply every pending migration. Returns how many ran.
pub async fn run_migrations(pool: &SqlitePool) -> Result<usize> {
    apply(pool, MIGRATIONS).await
}

async fn apply(pool: &SqlitePool, migrations: &[Migration]) -> Result<usize> {
    let applied = applied_versions(pool).await?;
    let mut count = 0;

    for migration in migrations.iter().filter(|m| !applied.contains(&m.version)) {
        info!(
            "Applying migration {} ({})",
            migration.version, migration.name
        );

        let mut tx = pool.begin().await?;
        sqlx::query(migration.sql)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Migration {} failed", migration.name))?;
        sqlx::query("INSERT INTO schema_migrations (version, name) VALUES (?, ?)")
            .bind(migration.version)
            .bind(migration.name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        count += 1;
    }

    if count == 0 {
        info!("Database schema is up to date");
    }
    Ok(count)
}
