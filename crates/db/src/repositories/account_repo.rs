//! Repository for the `accounts` (credentials) table.

use medialog_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::account::Account;

const COLUMNS: &str = "id, user_id, provider, password_hash, created_at";

/// Provides credential registration and lookup.
pub struct AccountRepo;

impl AccountRepo {
    /// Create or replace the credential row for `(user_id, provider)`.
    ///
    /// Idempotent under retried signups. Generic over the executor so it
    /// can run inside the signup transaction as well as standalone.
    pub async fn upsert<'e, E>(
        executor: E,
        user_id: DbId,
        provider: &str,
        password_hash: &str,
    ) -> Result<Account, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO accounts (user_id, provider, password_hash)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_accounts_user_provider
             DO UPDATE SET password_hash = EXCLUDED.password_hash
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(user_id)
            .bind(provider)
            .bind(password_hash)
            .fetch_one(executor)
            .await
    }

    /// Find the credential row for `(user_id, provider)`.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        provider: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE user_id = $1 AND provider = $2");
        sqlx::query_as::<_, Account>(&query)
            .bind(user_id)
            .bind(provider)
            .fetch_optional(pool)
            .await
    }
}
