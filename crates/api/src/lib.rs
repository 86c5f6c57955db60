//! Warden API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! auth primitives) so integration tests and the binary entrypoint share
//! the same construction paths.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
