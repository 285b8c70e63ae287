//! Repository for the `users` table.

use medialog_core::auth::PROVIDER_CREDENTIALS;
use medialog_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User, UserWithCredential};
use crate::repositories::AccountRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, created_at, updated_at";

/// Provides read and creation operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Create a user together with its password credential in a single
    /// transaction: either both rows land or neither does.
    pub async fn create_with_credential(
        pool: &PgPool,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO users (email, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        AccountRepo::upsert(
            &mut *tx,
            user.id,
            PROVIDER_CREDENTIALS,
            &input.password_hash,
        )
        .await?;

        tx.commit().await?;
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive exact match, as persisted).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user and their password hash by email in one round trip.
    ///
    /// Returns `None` both when no such user exists and when the user has
    /// no credential for the given provider; signin treats the two alike.
    pub async fn find_by_email_with_credential(
        pool: &PgPool,
        email: &str,
        provider: &str,
    ) -> Result<Option<UserWithCredential>, sqlx::Error> {
        sqlx::query_as::<_, UserWithCredential>(
            "SELECT u.id, u.email, u.name, a.password_hash, u.created_at, u.updated_at
             FROM users u
             JOIN accounts a ON a.user_id = u.id AND a.provider = $2
             WHERE u.email = $1",
        )
        .bind(email)
        .bind(provider)
        .fetch_optional(pool)
        .await
    }
}
