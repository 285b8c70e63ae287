//! User entity model and DTOs.

use medialog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// User row joined with the password credential for that user, used by the
/// single-round-trip signin lookup.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`UserView`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct UserWithCredential {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public user view embedded in signup/signin responses (no hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        UserView {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

impl From<&UserWithCredential> for UserView {
    fn from(user: &UserWithCredential) -> Self {
        UserView {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Profile representation returned by `GET /auth/profile`.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub created_at: Timestamp,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Profile {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user together with its password credential.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub name: Option<String>,
    /// Already-hashed password (PHC string); hashing happens in the api crate.
    pub password_hash: String,
}
