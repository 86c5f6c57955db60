//! Handlers for the `/auth` resource (login, refresh, logout).

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::auth::lifecycle::TokenPair;
use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
///
/// Fields default to empty so a missing key surfaces as a validation
/// failure (400) rather than a body-deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/refresh` and `POST /auth/logout`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/login
///
/// Authenticate with username and password. Returns a fresh token pair.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenPair>> {
    let pair = state
        .lifecycle
        .login(&input.username, &input.password)
        .await?;
    Ok(Json(pair))
}

/// POST /auth/refresh
///
/// Exchange a live refresh token for a new pair, rotating the session.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshTokenRequest>,
) -> AppResult<Json<TokenPair>> {
    let pair = state.lifecycle.renew(&input.refresh_token).await?;
    Ok(Json(pair))
}

/// POST /auth/logout
///
/// Revoke every session belonging to the token's owner. Succeeds whether
/// or not the token was ever issued.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<RefreshTokenRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.lifecycle.logout(&input.refresh_token).await?;
    Ok(Json(MessageResponse::new("Logged out")))
}
