//! Startup identity seeding.
//!
//! Creates the initial `admin` identity (role `Admin`, claim
//! `Department = IT`) so a fresh deployment has a working login. Safe to
//! run on every boot: existing rows are left untouched.

use warden_core::roles::{CLAIM_TYPE_DEPARTMENT, DEPARTMENT_IT, ROLE_ADMIN};
use warden_db::models::user::CreateUser;
use warden_db::repositories::{ClaimRepo, RoleRepo, UserRepo};
use warden_db::DbPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Username of the seeded administrator.
pub const SEED_ADMIN_USERNAME: &str = "admin";
/// Initial password of the seeded administrator. Meant to be changed after
/// the first login in any real deployment.
const SEED_ADMIN_PASSWORD: &str = "Password123!";

/// Ensure the seeded admin identity exists.
pub async fn seed_identity(pool: &DbPool) -> AppResult<()> {
    let role = RoleRepo::find_by_name(pool, ROLE_ADMIN)
        .await?
        .ok_or_else(|| AppError::InternalError("Admin role missing from migrations".into()))?;

    if UserRepo::find_by_username(pool, SEED_ADMIN_USERNAME)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let password_hash = hash_password(SEED_ADMIN_PASSWORD)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: SEED_ADMIN_USERNAME.to_string(),
            email: "admin@example.com".to_string(),
            full_name: "Jane Admin".to_string(),
            password_hash,
        },
    )
    .await?;

    RoleRepo::assign(pool, user.id, role.id).await?;
    ClaimRepo::add(pool, user.id, CLAIM_TYPE_DEPARTMENT, DEPARTMENT_IT).await?;

    tracing::info!(username = SEED_ADMIN_USERNAME, user_id = %user.id, "Seeded admin identity");

    Ok(())
}
