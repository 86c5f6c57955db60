//! Authentication and session lifecycle building blocks.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- access-token minting and verification.
//! - [`refresh`] -- renewal-secret generation and digesting.
//! - [`identity`] -- Postgres-backed identity store.
//! - [`lifecycle`] -- login / renew / logout orchestration.

pub mod identity;
pub mod jwt;
pub mod lifecycle;
pub mod password;
pub mod refresh;
