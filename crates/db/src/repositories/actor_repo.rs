//! Repository for the `actors` table.
//!
//! Actor writes never touch `movies_actors`; associations are owned by the
//! movie mutation paths in [`super::MovieRepo`].

use cinedex_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::error::MutationError;
use crate::models::actor::{Actor, ActorWithMovies, CreateActor, UpdateActor};
use crate::patch::PartialUpdate;

/// Column list for the `actors` table.
const COLUMNS: &str = "actor_id AS id, name, sex, date_of_birth";

/// Patchable columns, in the order they appear in generated `SET` clauses.
const PATCH_COLUMNS: &[&str] = &["name", "sex", "date_of_birth"];

/// Provides CRUD operations and name resolution for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (name, sex, date_of_birth) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(&input.sex)
            .bind(input.date_of_birth)
            .fetch_one(pool)
            .await
    }

    /// Resolve an actor name (exact, case-sensitive) to its id.
    ///
    /// Names are not unique; when several actors share a name the one with
    /// the lowest id wins. Accepts any executor so it can run inside the
    /// caller's transaction.
    pub async fn resolve_id_by_name<'e, E>(
        executor: E,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, DbId>(
            "SELECT actor_id FROM actors WHERE name = $1 ORDER BY actor_id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(executor)
        .await
    }

    /// Apply a partial update. Fails with [`MutationError::ActorNotFound`]
    /// when no row has the given id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<(), MutationError> {
        let patch = PartialUpdate::new("actors", "actor_id", PATCH_COLUMNS)
            .set_opt("name", input.name.clone())
            .set_opt("sex", input.sex.clone())
            .set_opt("date_of_birth", input.date_of_birth);

        let affected = patch.execute(pool, id).await?;
        if affected == 0 {
            return Err(MutationError::ActorNotFound(id));
        }
        Ok(())
    }

    /// Delete an actor row.
    ///
    /// Association rows are removed by the `ON DELETE CASCADE` foreign key,
    /// not by this statement.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        let result = sqlx::query("DELETE FROM actors WHERE actor_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(MutationError::ActorNotFound(id));
        }
        Ok(())
    }

    /// List every actor with the titles of its movies, ordered by name.
    ///
    /// Actors without any movie are included with an empty list.
    pub async fn list_with_movies(pool: &PgPool) -> Result<Vec<ActorWithMovies>, sqlx::Error> {
        sqlx::query_as::<_, ActorWithMovies>(
            "SELECT a.actor_id AS id, a.name, a.sex, a.date_of_birth, \
                    COALESCE( \
                        array_agg(m.name::text ORDER BY m.name) \
                            FILTER (WHERE m.movie_id IS NOT NULL), \
                        ARRAY[]::text[] \
                    ) AS movies \
             FROM actors a \
             LEFT JOIN movies_actors ma ON ma.actor_id = a.actor_id \
             LEFT JOIN movies m ON m.movie_id = ma.movie_id \
             GROUP BY a.actor_id \
             ORDER BY a.name, a.actor_id",
        )
        .fetch_all(pool)
        .await
    }
}
