//! Handlers for the `/admin` resource (claim management).
//!
//! Everything here requires the `Admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use warden_core::error::CoreError;
use warden_core::identity::AttributeClaim;
use warden_db::repositories::{ClaimRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `POST /admin/users/{username}/claims`.
#[derive(Debug, Deserialize)]
pub struct AddClaimRequest {
    #[serde(rename = "type", default)]
    pub claim_type: String,
    #[serde(default)]
    pub value: String,
}

/// POST /admin/users/{username}/claims
///
/// Attach an attribute claim to a user. Returns 201 with the stored claim,
/// 404 for an unknown username, or 409 when the exact claim already exists.
/// Tokens already issued keep their old claim set until the next renewal.
pub async fn add_user_claim(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(username): Path<String>,
    Json(input): Json<AddClaimRequest>,
) -> AppResult<(StatusCode, Json<AttributeClaim>)> {
    if input.claim_type.is_empty() || input.value.is_empty() {
        return Err(CoreError::Validation("Claim type and value are required".into()).into());
    }

    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "user",
            key: username.clone(),
        })?;

    let claim = ClaimRepo::add(&state.pool, user.id, &input.claim_type, &input.value).await?;

    tracing::info!(
        user_id = %user.id,
        claim_type = %input.claim_type,
        "Attached attribute claim"
    );

    Ok((StatusCode::CREATED, Json(AttributeClaim::from(claim))))
}
