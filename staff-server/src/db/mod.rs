//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod repository;

use repository::{RepoError, RepoResult};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Path value selecting a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Database service, owns the SQLite connection pool
///
/// The pool holds exactly one connection, so statements are serialized and an
/// in-memory database lives as long as the service.
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply migrations
    pub async fn new(db_path: &str) -> RepoResult<Self> {
        let options = if db_path == IN_MEMORY {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| RepoError::Database(format!("Invalid database path: {e}")))?
        } else {
            SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
                .map_err(|e| RepoError::Database(format!("Invalid database path: {e}")))?
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
        }
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Fresh in-memory database
    pub async fn in_memory() -> RepoResult<Self> {
        Self::new(IN_MEMORY).await
    }
}
