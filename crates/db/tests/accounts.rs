//! Credential store round trips: signup writes a credential row that
//! `AccountRepo::find` can read back, and a retried upsert replaces the
//! hash in place instead of stacking a second row.

use medialog_core::auth::PROVIDER_CREDENTIALS;
use medialog_db::models::user::CreateUser;
use medialog_db::repositories::{AccountRepo, UserRepo};
use sqlx::PgPool;

async fn create_user(pool: &PgPool, email: &str, hash: &str) -> medialog_db::models::user::User {
    let input = CreateUser {
        email: email.to_string(),
        name: None,
        password_hash: hash.to_string(),
    };
    UserRepo::create_with_credential(pool, &input)
        .await
        .expect("user creation should succeed")
}

#[sqlx::test]
async fn signup_credential_is_findable(pool: PgPool) {
    let user = create_user(&pool, "cred@example.com", "$argon2id$initial").await;

    let account = AccountRepo::find(&pool, user.id, PROVIDER_CREDENTIALS)
        .await
        .expect("lookup should succeed")
        .expect("credential row should exist after signup");

    assert_eq!(account.user_id, user.id);
    assert_eq!(account.provider, PROVIDER_CREDENTIALS);
    assert_eq!(account.password_hash, "$argon2id$initial");
}

#[sqlx::test]
async fn retried_upsert_replaces_hash_in_place(pool: PgPool) {
    let user = create_user(&pool, "retry@example.com", "$argon2id$first").await;

    let original = AccountRepo::find(&pool, user.id, PROVIDER_CREDENTIALS)
        .await
        .expect("lookup should succeed")
        .expect("credential row should exist");

    let replaced = AccountRepo::upsert(&pool, user.id, PROVIDER_CREDENTIALS, "$argon2id$second")
        .await
        .expect("upsert should succeed");

    // Same row updated, not a second credential for the pair.
    assert_eq!(replaced.id, original.id);
    assert_eq!(replaced.password_hash, "$argon2id$second");

    let found = AccountRepo::find(&pool, user.id, PROVIDER_CREDENTIALS)
        .await
        .expect("lookup should succeed")
        .expect("credential row should still exist");
    assert_eq!(found.password_hash, "$argon2id$second");
}

#[sqlx::test]
async fn find_unknown_provider_is_none(pool: PgPool) {
    let user = create_user(&pool, "oauthless@example.com", "$argon2id$hash").await;

    let missing = AccountRepo::find(&pool, user.id, "oauth_github")
        .await
        .expect("lookup should succeed");

    assert!(missing.is_none());
}
