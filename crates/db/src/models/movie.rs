//! Movie entity model and DTOs.
//!
//! Movies are linked to actors through the `movies_actors` junction table.
//! Callers refer to actors by name; the repository resolves names to ids
//! inside the write transaction.

use cinedex_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A movie with the names of its associated actors, ordered by name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieWithActors {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub release_date: Date,
    pub rating: f64,
    pub actors: Vec<String>,
}

/// DTO for creating a new movie together with its actor associations.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub name: String,
    pub description: String,
    pub release_date: Date,
    pub rating: f64,
    /// Actor names in the order supplied. Duplicates are kept.
    pub actors: Vec<String>,
}

/// DTO for patching a movie.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<Date>,
    pub rating: Option<f64>,
    /// If non-empty, replaces all actor associations. `None` or an empty
    /// list leaves them unchanged.
    pub actors: Option<Vec<String>>,
}

impl UpdateMovie {
    /// The replacement actor set, if this patch carries one.
    pub fn replacement_actors(&self) -> Option<&[String]> {
        self.actors.as_deref().filter(|names| !names.is_empty())
    }
}
