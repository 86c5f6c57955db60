//! Postgres-backed identity store.

use async_trait::async_trait;
use uuid::Uuid;
use warden_core::error::CoreError;
use warden_core::identity::{AttributeClaim, IdentityStore, Principal};
use warden_db::models::user::User;
use warden_db::repositories::{ClaimRepo, RoleRepo, UserRepo};
use warden_db::DbPool;

use crate::auth::password::verify_password;

/// [`IdentityStore`] implementation over the `users`, `user_roles`, and
/// `user_claims` tables.
pub struct PgIdentityStore {
    pool: DbPool,
}

impl PgIdentityStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn principal_from(user: User) -> Principal {
    Principal {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("Identity store query failed: {err}"))
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn find_by_name(&self, username: &str) -> Result<Option<Principal>, CoreError> {
        let user = UserRepo::find_by_username(&self.pool, username)
            .await
            .map_err(storage_error)?;
        Ok(user.map(principal_from))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, CoreError> {
        let user = UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?;
        Ok(user.map(principal_from))
    }

    async fn check_password(&self, id: Uuid, password: &str) -> Result<bool, CoreError> {
        let Some(user) = UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(storage_error)?
        else {
            return Ok(false);
        };
        verify_password(password, &user.password_hash)
            .map_err(|e| CoreError::Internal(format!("Password verification error: {e}")))
    }

    async fn roles(&self, id: Uuid) -> Result<Vec<String>, CoreError> {
        RoleRepo::names_for_user(&self.pool, id)
            .await
            .map_err(storage_error)
    }

    async fn claims(&self, id: Uuid) -> Result<Vec<AttributeClaim>, CoreError> {
        let rows = ClaimRepo::list_for_user(&self.pool, id)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(AttributeClaim::from).collect())
    }
}
