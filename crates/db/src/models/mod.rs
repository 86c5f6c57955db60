//! Database entity models.
//!
//! Each submodule holds a `FromRow` struct matching a table's row layout,
//! plus create DTOs where inserts take more than a couple of fields.

pub mod role;
pub mod session;
pub mod user;
pub mod user_claim;
