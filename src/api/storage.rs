//! `SQLite` storage for user accounts.
//!
//! The `users` table is the only persistent state. Every call acquires its own
//! connection from the pool for a single statement and hands it back when the
//! statement completes.

use anyhow::{Context, Result};
use sqlx::{
    Connection, Row, SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{path::Path, time::Duration};
use tracing::{debug, info, instrument};

/// `id` is never reused (`AUTOINCREMENT`), `email` is unique and case-sensitive.
pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_digest TEXT NOT NULL
)";

/// Outcome of an insert into `users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created(i64),
    EmailTaken,
}

/// Handle to the accounts database, cloned into every request.
#[derive(Debug, Clone)]
pub struct Accounts {
    pool: SqlitePool,
}

impl Accounts {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file and make sure the schema exists.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the schema cannot be created.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        let accounts = Self::new(pool);

        accounts
            .bootstrap()
            .await
            .context("Failed to create users table")?;

        info!("Database ready: {}", path.display());

        Ok(accounts)
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `users` table if it does not exist yet.
    ///
    /// # Errors
    /// Returns the underlying `sqlx` error if the DDL fails.
    pub async fn bootstrap(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new account; a duplicate email is reported as [`Registration::EmailTaken`].
    ///
    /// # Errors
    /// Returns any `sqlx` error other than a unique-constraint violation.
    #[instrument(skip(self, digest))]
    pub async fn create(&self, email: &str, digest: &str) -> Result<Registration, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        match sqlx::query("INSERT INTO users (email, password_digest) VALUES (?, ?)")
            .bind(email)
            .bind(digest)
            .execute(&mut *conn)
            .await
        {
            Ok(result) => Ok(Registration::Created(result.last_insert_rowid())),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                debug!("Unique constraint rejected email");

                Ok(Registration::EmailTaken)
            }
            Err(e) => Err(e),
        }
    }

    /// Whether an account matches both `email` and `digest` exactly.
    ///
    /// # Errors
    /// Returns the underlying `sqlx` error if the lookup fails.
    #[instrument(skip(self, digest))]
    pub async fn verify(&self, email: &str, digest: &str) -> Result<bool, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query("SELECT id FROM users WHERE email = ? AND password_digest = ?")
            .bind(email)
            .bind(digest)
            .fetch_optional(&mut *conn)
            .await?;

        if let Some(row) = &row {
            let id: i64 = row.try_get("id")?;
            debug!(id, "Credentials matched");
        }

        Ok(row.is_some())
    }

    /// Acquire a connection and ping it.
    ///
    /// # Errors
    /// Returns the underlying `sqlx` error if the database is unreachable.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
