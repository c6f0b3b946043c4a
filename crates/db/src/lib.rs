//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the existing `projects` and `expenses` tables
//! - Repository abstractions for data access
//! - Connection pool setup
//!
//! The schema is managed outside the service; `sql/schema.sql` documents it.

// Column, PrimaryKey and ActiveModel are generated by the SeaORM derives.
#[allow(missing_docs)]
pub mod entities;
pub mod repositories;

pub use repositories::{ExpenseRepository, ProjectRepository};

use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlxPostgresConnector};
use sitebook_shared::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

/// Reference schema for the tables this crate maps.
pub const SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// Establishes the connection pool described by `config`.
///
/// Transport encryption follows `config.ssl_mode` (`require` by default).
///
/// # Errors
///
/// Returns an error if the SSL mode is unknown or the initial connection
/// cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let ssl_mode: PgSslMode = config
        .ssl_mode
        .parse()
        .map_err(|e| DbErr::Custom(format!("invalid ssl_mode '{}': {e}", config.ssl_mode)))?;

    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(options)
        .await
        .map_err(|e| DbErr::Conn(RuntimeErr::SqlxError(e)))?;

    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Database pool established"
    );

    Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
}
