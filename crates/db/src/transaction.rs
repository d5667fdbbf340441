//! Commit/rollback plumbing shared by the mutation paths.

use sqlx::{Postgres, Transaction};

use crate::error::MutationError;

/// Commit `tx` if `outcome` succeeded, otherwise roll it back and surface the
/// original error.
///
/// A rollback failure is logged but does not mask the error that caused it;
/// the connection is discarded by the pool in that case.
pub(crate) async fn finish<T>(
    tx: Transaction<'_, Postgres>,
    outcome: Result<T, MutationError>,
) -> Result<T, MutationError> {
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Transaction rollback failed");
            }
            tracing::warn!(error = %err, "Transaction rolled back");
            Err(err)
        }
    }
}
