//! Database connection pool management and schema application.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::PersistenceError;

/// Database configuration, consumed once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    #[serde(default)]
    pub schema_mode: SchemaMode,
}

fn default_max_connections() -> u32 {
    5
}
fn default_min_connections() -> u32 {
    1
}
fn default_connect_timeout() -> u64 {
    10
}
fn default_idle_timeout() -> u64 {
    600
}

/// What to do with the schema at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaMode {
    /// Leave the schema as-is.
    None,
    /// Fail startup if a required table is missing.
    Validate,
    /// Create missing tables in place.
    #[default]
    Update,
    /// Drop and recreate all tables.
    Create,
}

// Every entity draws its surrogate key from the ids allocator, one keyspace
// for users and cars alike: a user's key can never equal its car's key.
const TABLES: &[(&str, &str)] = &[
    (
        "ids",
        r#"
        CREATE TABLE IF NOT EXISTS ids (
            id INTEGER PRIMARY KEY AUTOINCREMENT
        )
        "#,
    ),
    (
        "cars",
        r#"
        CREATE TABLE IF NOT EXISTS cars (
            id     INTEGER PRIMARY KEY,
            model  TEXT NOT NULL,
            series INTEGER NOT NULL
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id         INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name  TEXT NOT NULL,
            email      TEXT NOT NULL UNIQUE,
            car_id     INTEGER REFERENCES cars (id)
        )
        "#,
    ),
];

/// Creates a SQLite connection pool with the given configuration.
///
/// Failure here is a connectivity failure: the process must not proceed to
/// seed or serve on a pool it could not open.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, PersistenceError> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(PersistenceError::Connectivity)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(options)
        .await
        .map_err(PersistenceError::Connectivity)
}

/// Applies the configured schema mode to the pool.
pub async fn apply_schema(pool: &SqlitePool, mode: SchemaMode) -> Result<(), PersistenceError> {
    match mode {
        SchemaMode::None => Ok(()),
        SchemaMode::Validate => validate_schema(pool).await,
        SchemaMode::Update => create_tables(pool).await,
        SchemaMode::Create => {
            // users references cars, so it must be dropped first
            sqlx::query("DROP TABLE IF EXISTS users").execute(pool).await?;
            sqlx::query("DROP TABLE IF EXISTS cars").execute(pool).await?;
            sqlx::query("DROP TABLE IF EXISTS ids").execute(pool).await?;
            create_tables(pool).await
        }
    }
}

async fn create_tables(pool: &SqlitePool) -> Result<(), PersistenceError> {
    for (name, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        info!(table = name, "schema ensured");
    }
    Ok(())
}

async fn validate_schema(pool: &SqlitePool) -> Result<(), PersistenceError> {
    for (name, _) in TABLES {
        let found: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        if found.is_none() {
            return Err(PersistenceError::SchemaMismatch(format!(
                "required table '{name}' does not exist"
            )));
        }
    }
    Ok(())
}
