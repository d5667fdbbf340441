use cinedex_core::types::DbId;

/// Failure of a catalog write.
///
/// Every variant is returned only after the enclosing transaction (if any)
/// has been rolled back, so no partial write is observable.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// An actor name supplied for association has no matching row.
    #[error("Actor not found: {0}")]
    UnknownActor(String),

    #[error("Movie with id {0} not found")]
    MovieNotFound(DbId),

    #[error("Actor with id {0} not found")]
    ActorNotFound(DbId),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
