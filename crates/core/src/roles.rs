//! Well-known role and claim constants.
//!
//! These must stay in sync with the seed rows inserted by the database
//! migrations and with the authorization gates in the API crate.

/// Role granting access to administrative endpoints.
pub const ROLE_ADMIN: &str = "Admin";

/// Claim type used for department membership checks.
pub const CLAIM_TYPE_DEPARTMENT: &str = "Department";

/// Department value required by the IT-department gate.
pub const DEPARTMENT_IT: &str = "IT";
