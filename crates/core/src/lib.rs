//! Cinedex core: domain types, error kinds and pure validation logic.
//!
//! This crate has no I/O and no internal dependencies so it can be shared by
//! the repository layer, the HTTP layer and their tests.

pub mod catalog;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
