use axum::routing::{get, post};
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET         /                 -> list
/// POST        /create           -> create
/// GET, POST   /update           -> update (?id=)
/// POST        /delete           -> delete (?id=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list))
        .route("/create", post(actor::create))
        .route("/update", get(actor::update).post(actor::update))
        .route("/delete", post(actor::delete))
}
