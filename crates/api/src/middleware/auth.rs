//! HTTP Basic authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::repositories::UserRepo;

use crate::auth::basic::parse_basic_header;
use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, resolved from `Authorization: Basic` credentials.
///
/// The role travels with the request as this typed value; handlers receive
/// it as an extractor parameter, usually through [`super::rbac`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub username: String,
    /// Role name (e.g. `"admin"`, `"viewer"`).
    pub role: String,
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let credentials = parse_basic_header(auth_header).ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Basic <credentials>")
        })?;

        let user = UserRepo::find_by_username(&state.pool, &credentials.username)
            .await?
            .ok_or_else(|| unauthorized("Invalid username or password"))?;

        let password_valid = verify_password(&credentials.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if !password_valid {
            tracing::warn!(username = %user.username, "Rejected Basic credentials");
            return Err(unauthorized("Invalid username or password"));
        }

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
            role: user.role,
        })
    }
}
