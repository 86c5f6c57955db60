//! Repository for the `user_claims` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user_claim::UserClaim;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, claim_type, claim_value, created_at";

/// Provides operations for user attribute claims.
pub struct ClaimRepo;

impl ClaimRepo {
    /// All claims for a user in append order (`id` ascending).
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<UserClaim>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_claims WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, UserClaim>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a claim, returning the created row.
    ///
    /// The exact (type, value) pair is unique per user; a duplicate insert
    /// fails the `uq_user_claims_user_type_value` constraint.
    pub async fn add(
        pool: &PgPool,
        user_id: Uuid,
        claim_type: &str,
        claim_value: &str,
    ) -> Result<UserClaim, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_claims (user_id, claim_type, claim_value)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserClaim>(&query)
            .bind(user_id)
            .bind(claim_type)
            .bind(claim_value)
            .fetch_one(pool)
            .await
    }

    /// Delete a claim by exact (type, value). Returns `true` if a row was removed.
    pub async fn remove(
        pool: &PgPool,
        user_id: Uuid,
        claim_type: &str,
        claim_value: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM user_claims
             WHERE user_id = $1 AND claim_type = $2 AND claim_value = $3",
        )
        .bind(user_id)
        .bind(claim_type)
        .bind(claim_value)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
