//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Verifies HTTP Basic credentials against the `users` table.
//! - [`rbac::RequireAdmin`] -- Requires the privileged `admin` role.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.

pub mod auth;
pub mod rbac;
