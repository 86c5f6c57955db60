//! Role- and claim-based authorization extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose embedded
//! facts do not pass the gate. Authorization decisions read only the
//! token; the database is never consulted per request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use warden_core::error::CoreError;
use warden_core::roles::{CLAIM_TYPE_DEPARTMENT, DEPARTMENT_IT, ROLE_ADMIN};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `Admin` role. Rejects with 403 Forbidden otherwise.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.has_role(ROLE_ADMIN) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires the `Department = IT` attribute claim. Rejects with 403
/// Forbidden otherwise.
pub struct RequireItDepartment(pub AuthUser);

impl FromRequestParts<AppState> for RequireItDepartment {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.has_claim(CLAIM_TYPE_DEPARTMENT, DEPARTMENT_IT) {
            return Err(AppError::Core(CoreError::Forbidden(
                "IT department claim required".into(),
            )));
        }
        Ok(RequireItDepartment(user))
    }
}
