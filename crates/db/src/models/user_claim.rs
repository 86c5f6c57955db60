//! User attribute claim entity model.

use sqlx::FromRow;
use uuid::Uuid;
use warden_core::identity::AttributeClaim;
use warden_core::types::{DbId, Timestamp};

/// An attribute claim row from the `user_claims` table.
///
/// Row ids are BIGSERIAL, so ordering by `id` reproduces append order.
#[derive(Debug, Clone, FromRow)]
pub struct UserClaim {
    pub id: DbId,
    pub user_id: Uuid,
    pub claim_type: String,
    pub claim_value: String,
    pub created_at: Timestamp,
}

impl From<UserClaim> for AttributeClaim {
    fn from(row: UserClaim) -> Self {
        AttributeClaim {
            claim_type: row.claim_type,
            value: row.claim_value,
        }
    }
}
