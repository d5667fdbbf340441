//! Route definitions for the movie catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET         /                 -> list (?sort=title|release_date|rating)
/// GET         /search           -> search (?query=)
/// POST        /create           -> create
/// GET, POST   /update           -> update (?id=)
/// POST        /delete           -> delete (?id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list))
        .route("/search", get(movie::search))
        .route("/create", post(movie::create))
        .route("/update", get(movie::update).post(movie::update))
        .route("/delete", post(movie::delete))
}
