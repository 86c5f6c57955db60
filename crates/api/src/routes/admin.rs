//! Route definitions for the `/admin` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /users/{username}/claims -> attach an attribute claim (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{username}/claims", post(admin::add_user_claim))
}
