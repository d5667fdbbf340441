//! Shared query parameter types for API handlers.

use cinedex_core::types::DbId;
use serde::Deserialize;

/// `?id=` addressing parameter used by update and delete endpoints.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: DbId,
}

/// `?sort=` parameter for the movie listing (`title`, `release_date`, or
/// anything else for rating).
#[derive(Debug, Deserialize)]
pub struct SortParams {
    pub sort: Option<String>,
}

/// `?query=` parameter for movie search. A missing or empty value matches
/// every movie.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}
