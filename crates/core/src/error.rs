use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A query ran successfully but matched nothing.
    #[error("No matches: {0}")]
    NoMatches(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A human-readable reference (e.g. an actor name) has no matching row.
    #[error("Unresolved reference: no {entity} named '{name}'")]
    UnresolvedReference { entity: &'static str, name: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
