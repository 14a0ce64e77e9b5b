//! SQLite database layer for user records.
//!
//! One pool, opened at startup and shared across handlers. Every operation
//! is a single statement against the `users` table.

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::types::User;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the pool for the given connection string (e.g.
    /// `sqlite://scrapbook.db` or `sqlite::memory:`) and ensures the users
    /// table exists.
    pub async fn new(dsn: &str) -> Result<Self> {
        tracing::info!("Connecting to SQLite: {}", dsn);

        let options = SqliteConnectOptions::from_str(dsn)
            .with_context(|| format!("Invalid DSN: {}", dsn))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database: {}", dsn))?;

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                age INTEGER NOT NULL,
                payedvacation INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// All users, in the table's natural scan order.
    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, email, first_name, last_name, age, payedvacation
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, email, first_name, last_name, age, payedvacation
            FROM users WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Inserts a user, generating a fresh id. Returns the generated id.
    pub async fn add_user(&self, user: &User) -> Result<String, sqlx::Error> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, first_name, last_name, age, payedvacation)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&id)
        .bind(&user.email)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(user.age)
        .bind(user.payedvacation)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Deletes by id; affecting zero rows is not an error.
    pub async fn delete_user(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM users WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

// A fresh on-disk database per test; `sqlite::memory:` would give every
// pooled connection its own empty database.
#[cfg(test)]
pub(crate) fn temp_dsn() -> String {
    format!(
        "sqlite://{}/scrapbook_test_{}.db",
        std::env::temp_dir().display(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    )
}
