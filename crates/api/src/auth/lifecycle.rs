//! Session lifecycle orchestration: login, renew, logout.
//!
//! Every operation follows the same shape: validate input, consult the
//! identity store, mint, then write through [`SessionRepo`]. Client-facing
//! failures are uniform: no response distinguishes an unknown user from a
//! bad password, or an absent refresh token from an expired or revoked one.

use std::sync::Arc;

use serde::Serialize;
use warden_core::error::CoreError;
use warden_core::identity::{IdentityFacts, IdentityStore, Principal};
use warden_db::repositories::SessionRepo;
use warden_db::DbPool;

use crate::auth::jwt::AccessTokenMinter;
use crate::auth::refresh;
use crate::error::{AppError, AppResult};

/// Fresh access + refresh token pair returned by login and renew.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Drives the session state machine over the identity store, the token
/// minter, and the session table.
pub struct SessionLifecycle {
    pool: DbPool,
    identity: Arc<dyn IdentityStore>,
    minter: Arc<AccessTokenMinter>,
    refresh_lifetime_days: i64,
}

impl SessionLifecycle {
    pub fn new(
        pool: DbPool,
        identity: Arc<dyn IdentityStore>,
        minter: Arc<AccessTokenMinter>,
        refresh_lifetime_days: i64,
    ) -> Self {
        Self {
            pool,
            identity,
            minter,
            refresh_lifetime_days,
        }
    }

    /// Authenticate a user and open a new session chain.
    ///
    /// Empty fields fail validation before the identity store is contacted.
    /// Unknown users and wrong passwords produce identical failures.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenPair> {
        if username.is_empty() || password.is_empty() {
            return Err(CoreError::Validation("Username and password are required".into()).into());
        }

        let principal = self
            .identity
            .find_by_name(username)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.identity.check_password(principal.id, password).await? {
            return Err(invalid_credentials());
        }

        let facts = self.current_facts(&principal).await?;
        let access_token = self.mint_access_token(&facts)?;

        let secret = refresh::generate_secret();
        let session = SessionRepo::create(
            &self.pool,
            principal.id,
            &refresh::digest(&secret),
            self.refresh_lifetime_days,
        )
        .await?;

        tracing::info!(
            user_id = %principal.id,
            session_id = %session.id,
            "Login opened a new session chain"
        );

        Ok(TokenPair {
            access_token,
            refresh_token: secret,
        })
    }

    /// Exchange a live refresh token for a fresh pair, rotating the chain.
    ///
    /// Identity facts are re-read from the store on every renewal; role and
    /// claim changes since login land in the next access token.
    pub async fn renew(&self, refresh_token: &str) -> AppResult<TokenPair> {
        if refresh_token.is_empty() {
            return Err(CoreError::Validation("Refresh token is required".into()).into());
        }

        let session = SessionRepo::find_valid(&self.pool, &refresh::digest(refresh_token))
            .await?
            .ok_or_else(invalid_refresh_token)?;

        let principal = self
            .identity
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(invalid_refresh_token)?;

        let facts = self.current_facts(&principal).await?;
        let access_token = self.mint_access_token(&facts)?;

        let secret = refresh::generate_secret();
        let successor = SessionRepo::rotate(
            &self.pool,
            &session,
            &refresh::digest(&secret),
            self.refresh_lifetime_days,
        )
        .await?
        // A concurrent renewal already consumed this session.
        .ok_or_else(invalid_refresh_token)?;

        tracing::debug!(
            user_id = %principal.id,
            session_id = %successor.id,
            replaces_id = %session.id,
            "Rotated refresh session"
        );

        Ok(TokenPair {
            access_token,
            refresh_token: secret,
        })
    }

    /// End every session for the user owning the presented token.
    ///
    /// Unknown and already-revoked tokens return success unchanged, so the
    /// response never reveals whether a secret was ever issued. An expired
    /// but unrevoked token still identifies its owner and triggers the
    /// full revocation.
    pub async fn logout(&self, refresh_token: &str) -> AppResult<()> {
        let Some(session) =
            SessionRepo::find_by_token_hash(&self.pool, &refresh::digest(refresh_token)).await?
        else {
            return Ok(());
        };
        if session.is_revoked() {
            return Ok(());
        }

        let revoked = SessionRepo::revoke_all_for_user(&self.pool, session.user_id).await?;
        tracing::info!(
            user_id = %session.user_id,
            revoked,
            "Logout revoked all sessions for user"
        );

        Ok(())
    }

    /// Re-derive the user's identity facts from the store.
    async fn current_facts(&self, principal: &Principal) -> AppResult<IdentityFacts> {
        let roles = self.identity.roles(principal.id).await?;
        let attributes = self.identity.claims(principal.id).await?;
        Ok(IdentityFacts {
            subject: principal.username.clone(),
            roles,
            attributes,
        })
    }

    fn mint_access_token(&self, facts: &IdentityFacts) -> AppResult<String> {
        self.minter
            .mint(facts)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
    }
}

/// Uniform login failure: never distinguishes unknown-user from wrong-password.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid username or password".into()))
}

/// Uniform renewal failure: never distinguishes absent, expired, or revoked.
fn invalid_refresh_token() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid or expired refresh token".into(),
    ))
}
