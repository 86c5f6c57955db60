//! Shared domain types for the warden workspace.
//!
//! This crate knows nothing about HTTP or storage. It holds the error
//! taxonomy, the identity-store capability trait, and the well-known role
//! and claim constants the rest of the workspace builds on.

pub mod error;
pub mod identity;
pub mod roles;
pub mod types;
