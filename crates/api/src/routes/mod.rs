pub mod actor;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                      list (any authenticated user)
/// /movies/search               search by title or actor name
/// /movies/create               create with actor names (admin only)
/// /movies/update               partial update, optional actor replacement (admin only)
/// /movies/delete               delete with associations (admin only)
///
/// /actors                      list with movie titles (any authenticated user)
/// /actors/create               create (admin only)
/// /actors/update               partial update (admin only)
/// /actors/delete               delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movie::router())
        .nest("/actors", actor::router())
}
