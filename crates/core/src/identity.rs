//! Identity capability interface consumed by the session lifecycle.
//!
//! The lifecycle never talks to user storage directly; it goes through
//! [`IdentityStore`], so any backend that can answer these five questions
//! can plug in. [`IdentityFacts`] is the snapshot handed to the token
//! minter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// A resolved user identity: the stable id plus display fields.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
}

/// A single attribute claim attached to a user (e.g. `Department = IT`).
///
/// A user may carry several claims of the same type with different values;
/// nothing here deduplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeClaim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
}

impl AttributeClaim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }
}

/// Snapshot of a user's identity facts at a single instant.
///
/// Re-derived from the store before every mint; never cached across
/// requests, so role and claim changes land in the next token issued.
#[derive(Debug, Clone)]
pub struct IdentityFacts {
    /// Token subject -- the username.
    pub subject: String,
    /// Role names in assignment order.
    pub roles: Vec<String>,
    /// Attribute claims in append order.
    pub attributes: Vec<AttributeClaim>,
}

/// Read-side identity store capability.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Look up a principal by username (case-sensitive).
    async fn find_by_name(&self, username: &str) -> Result<Option<Principal>, CoreError>;

    /// Look up a principal by stable id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, CoreError>;

    /// Check a plaintext password. Unknown ids verify as `false`.
    async fn check_password(&self, id: Uuid, password: &str) -> Result<bool, CoreError>;

    /// Role names assigned to a user, in assignment order.
    async fn roles(&self, id: Uuid) -> Result<Vec<String>, CoreError>;

    /// Attribute claims attached to a user, in append order.
    async fn claims(&self, id: Uuid) -> Result<Vec<AttributeClaim>, CoreError>;
}
