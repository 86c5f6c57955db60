//! Refresh session model.

use sqlx::FromRow;
use uuid::Uuid;
use warden_core::types::Timestamp;

/// A refresh session row from the `refresh_sessions` table.
///
/// One row per issued renewal credential. `replaces_id` links a rotated
/// credential back to its predecessor, forming the session's rotation chain.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshSession {
    pub id: Uuid,
    pub user_id: Uuid,
    /// SHA-256 hex digest of the renewal secret. The secret itself is never stored.
    pub token_hash: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    /// Predecessor in the rotation chain; `None` for chain roots.
    pub replaces_id: Option<Uuid>,
}

impl RefreshSession {
    /// A session is expired once the current instant reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now() >= self.expires_at
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Live and usable for renewal: neither expired nor revoked.
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_revoked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn session(expires_at: Timestamp, revoked_at: Option<Timestamp>) -> RefreshSession {
        RefreshSession {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            token_hash: "digest".to_string(),
            created_at: Utc::now() - Duration::days(1),
            expires_at,
            revoked_at,
            replaces_id: None,
        }
    }

    #[test]
    fn live_session_is_valid() {
        let s = session(Utc::now() + Duration::days(7), None);
        assert!(s.is_valid());
        assert!(!s.is_expired());
        assert!(!s.is_revoked());
    }

    #[test]
    fn past_expiry_invalidates() {
        let s = session(Utc::now() - Duration::seconds(1), None);
        assert!(s.is_expired());
        assert!(!s.is_valid());
    }

    #[test]
    fn revocation_invalidates_even_before_expiry() {
        let s = session(Utc::now() + Duration::days(7), Some(Utc::now()));
        assert!(!s.is_expired());
        assert!(s.is_revoked());
        assert!(!s.is_valid());
    }
}
