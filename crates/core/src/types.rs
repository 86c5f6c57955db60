//! Common type aliases used across the workspace.

/// Primary key type for lookup tables (roles, user claims). These are
/// PostgreSQL BIGSERIAL columns; users and sessions use UUIDs instead.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
