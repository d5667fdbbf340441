/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and is the only resource
/// shared between requests. Server configuration is consumed at startup by
/// the router builder and is not carried per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinedex_db::DbPool,
}
