//! Well-known role name constants.
//!
//! These must match the `role` values stored in the `users` table.

/// The privileged role: the only one allowed to create, update or delete.
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_VIEWER: &str = "viewer";
