//! Handlers for the `/auth` resource (signup, signin, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medialog_core::auth::PROVIDER_CREDENTIALS;
use medialog_core::error::CoreError;
use medialog_core::validation::{validate_email, validate_password};
use serde::{Deserialize, Serialize};

use medialog_db::models::user::{CreateUser, Profile, UserView};
use medialog_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Generic signin failure message. Deliberately identical for "no such
/// user", "no password credential", and "wrong password" so responses do
/// not reveal which half failed.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// Request body for `POST /auth/signin`.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by signup and signin.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserView,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/signup
///
/// Register a new account. Creates the user and its password credential
/// atomically, then returns the public user view and a session token.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    // 1. Gateway-side payload validation, before the issuer runs.
    validate_email(&input.email)?;
    validate_password(&input.password)?;

    // 2. Reject taken emails with a Conflict. The unique constraint on
    //    users.email backstops the race between this check and the insert.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "User with this email already exists".into(),
        )));
    }

    // 3. Hash the password and create user + credential in one transaction.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email: input.email,
        name: input.name,
        password_hash,
    };
    let user = UserRepo::create_with_credential(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, "User signed up");

    // 4. Issue a session token.
    let token = generate_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let response = AuthResponse {
        user: UserView::from(&user),
        token,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /auth/signin
///
/// Authenticate with email + password. Returns the public user view and a
/// session token. One storage round trip: the user row is fetched joined
/// with its password credential.
pub async fn signin(
    State(state): State<AppState>,
    Json(input): Json<SigninRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email_with_credential(
        &state.pool,
        &input.email,
        PROVIDER_CREDENTIALS,
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    tracing::info!(user_id = user.id, "User signed in");

    let token = generate_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let response = AuthResponse {
        user: UserView::from(&user),
        token,
    };
    Ok(Json(response))
}

/// GET /auth/profile
///
/// Return the authenticated user's profile. 401 when the token's subject
/// no longer resolves to a user.
pub async fn profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Profile>> {
    let record = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(Profile::from(record)))
}
