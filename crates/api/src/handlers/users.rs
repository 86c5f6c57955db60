//! Handlers for the `/users` resource: gated greeting endpoints plus
//! removal of the seeded department claim.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use warden_core::error::CoreError;
use warden_core::roles::{CLAIM_TYPE_DEPARTMENT, DEPARTMENT_IT};
use warden_db::repositories::{ClaimRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireItDepartment};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Response body for the gated greeting endpoints.
#[derive(Debug, Serialize)]
pub struct AccessGrantedResponse {
    pub message: &'static str,
    pub user: String,
}

/// GET /users/admin
///
/// Reachable only with the `Admin` role.
pub async fn admin_greeting(RequireAdmin(user): RequireAdmin) -> Json<AccessGrantedResponse> {
    Json(AccessGrantedResponse {
        message: "Access granted. You are an Admin.",
        user: user.subject,
    })
}

/// GET /users/it
///
/// Reachable only with the `Department = IT` attribute claim.
pub async fn it_greeting(
    RequireItDepartment(user): RequireItDepartment,
) -> Json<AccessGrantedResponse> {
    Json(AccessGrantedResponse {
        message: "Access granted. You belong to the IT department.",
        user: user.subject,
    })
}

/// DELETE /users/claims/department
///
/// Remove the seeded `Department = IT` claim from the `admin` user. Takes
/// effect on that user's next minted token, not on tokens already issued.
pub async fn remove_department_claim(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<MessageResponse>> {
    let user = UserRepo::find_by_username(&state.pool, "admin")
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "user",
            key: "admin".to_string(),
        })?;

    ClaimRepo::remove(&state.pool, user.id, CLAIM_TYPE_DEPARTMENT, DEPARTMENT_IT).await?;

    Ok(Json(MessageResponse::new("Department claim removed")))
}
