//! Route definitions for the `/users` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /admin              -> admin-gated greeting
/// GET    /it                 -> IT-department-gated greeting
/// DELETE /claims/department  -> remove the seeded department claim (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(users::admin_greeting))
        .route("/it", get(users::it_greeting))
        .route("/claims/department", delete(users::remove_department_claim))
}
