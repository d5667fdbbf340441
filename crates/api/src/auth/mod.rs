//! Authentication primitives.
//!
//! - [`basic`] -- `Authorization: Basic` header parsing.
//! - [`password`] -- Argon2id password hashing and verification.

pub mod basic;
pub mod password;
