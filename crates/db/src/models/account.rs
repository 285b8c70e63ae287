//! Credential (account) entity model.

use medialog_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One authentication method bound to a user.
///
/// Only the `"credentials"` (password) provider is currently issued; the
/// `(user_id, provider)` unique constraint keeps it to at most one row per
/// provider per user.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub user_id: DbId,
    pub provider: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}
