//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the lifecycle service or the repositories and map
//! errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod users;
