//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- extracts the caller from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- additionally requires the `Admin` role.
//! - [`rbac::RequireItDepartment`] -- additionally requires the
//!   `Department = IT` attribute claim.

pub mod auth;
pub mod rbac;
