//! Repository layer.
//!
//! Each repository is a zero-sized struct whose async methods take
//! `&PgPool` as the first argument.

pub mod claim_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;

pub use claim_repo::ClaimRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
