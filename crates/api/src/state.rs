//! Shared application state.

use std::sync::Arc;

use crate::auth::identity::PgIdentityStore;
use crate::auth::jwt::AccessTokenMinter;
use crate::auth::lifecycle::SessionLifecycle;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; inner data lives behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: warden_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Access-token minter, shared with the bearer-auth extractor.
    pub minter: Arc<AccessTokenMinter>,
    /// Session lifecycle orchestrator.
    pub lifecycle: Arc<SessionLifecycle>,
}

impl AppState {
    /// Wire up the minter, identity store, and lifecycle from configuration.
    ///
    /// Used by both the binary entrypoint and the integration tests, so
    /// every request path goes through identical construction.
    pub fn new(pool: warden_db::DbPool, config: ServerConfig) -> Self {
        let minter = Arc::new(AccessTokenMinter::new(&config.jwt));
        let identity = Arc::new(PgIdentityStore::new(pool.clone()));
        let lifecycle = Arc::new(SessionLifecycle::new(
            pool.clone(),
            identity,
            Arc::clone(&minter),
            config.jwt.refresh_token_expiry_days,
        ));

        Self {
            pool,
            config: Arc::new(config),
            minter,
            lifecycle,
        }
    }
}
