//! Repository for the `refresh_sessions` table.
//!
//! Sessions are append-only: rows are never deleted here, only marked
//! revoked, so rotation chains remain intact.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::session::RefreshSession;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, token_hash, created_at, expires_at, revoked_at, replaces_id";

/// Provides lifecycle operations for refresh sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a chain root for a fresh login (`replaces_id` is null).
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        token_hash: &str,
        lifetime_days: i64,
    ) -> Result<RefreshSession, sqlx::Error> {
        let created_at = Utc::now();
        let expires_at = created_at + chrono::Duration::days(lifetime_days);
        let query = format!(
            "INSERT INTO refresh_sessions (user_id, token_hash, created_at, expires_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RefreshSession>(&query)
            .bind(user_id)
            .bind(token_hash)
            .bind(created_at)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a live session by digest.
    ///
    /// Absent, expired, and revoked all come back as `None`; callers cannot
    /// tell which.
    pub async fn find_valid(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<RefreshSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM refresh_sessions
             WHERE token_hash = $1
               AND revoked_at IS NULL
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, RefreshSession>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Find a session by digest regardless of validity.
    pub async fn find_by_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<RefreshSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM refresh_sessions WHERE token_hash = $1");
        sqlx::query_as::<_, RefreshSession>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Atomically retire `old` and chain in its successor.
    ///
    /// Both writes commit together or not at all. Returns `None` when `old`
    /// was already revoked, which is how a concurrent renewal race resolves:
    /// at most one caller ever chains a successor from a given predecessor.
    pub async fn rotate(
        pool: &PgPool,
        old: &RefreshSession,
        new_token_hash: &str,
        lifetime_days: i64,
    ) -> Result<Option<RefreshSession>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let now = Utc::now();

        let revoked = sqlx::query(
            "UPDATE refresh_sessions SET revoked_at = $2
             WHERE id = $1 AND revoked_at IS NULL",
        )
        .bind(old.id)
        .bind(now)
        .execute(&mut *tx)
        .await?;
        if revoked.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let expires_at = now + chrono::Duration::days(lifetime_days);
        let query = format!(
            "INSERT INTO refresh_sessions (user_id, token_hash, created_at, expires_at, replaces_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let successor = sqlx::query_as::<_, RefreshSession>(&query)
            .bind(old.user_id)
            .bind(new_token_hash)
            .bind(now)
            .bind(expires_at)
            .bind(old.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(successor))
    }

    /// Revoke every unrevoked session for a user. Returns the revoked count.
    ///
    /// Already-revoked rows keep their original `revoked_at`; a second call
    /// changes nothing.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE refresh_sessions SET revoked_at = NOW()
             WHERE user_id = $1 AND revoked_at IS NULL",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Find the successor of a session, if it was ever rotated.
    pub async fn find_replacement(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<RefreshSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM refresh_sessions WHERE replaces_id = $1");
        sqlx::query_as::<_, RefreshSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
