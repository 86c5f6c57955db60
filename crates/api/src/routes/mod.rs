//! Route tree assembly.

pub mod admin;
pub mod auth;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// ```text
/// /auth/login                     POST   login (public)
/// /auth/refresh                   POST   rotate a refresh session (public)
/// /auth/logout                    POST   revoke all sessions (public, idempotent)
///
/// /users/admin                    GET    admin-gated greeting
/// /users/it                       GET    IT-department-gated greeting
/// /users/claims/department        DELETE remove seeded department claim (admin)
///
/// /admin/users/{username}/claims  POST   attach attribute claim (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/admin", admin::router())
}
