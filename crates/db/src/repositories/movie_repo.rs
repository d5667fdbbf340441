//! Repository for the `movies` and `movies_actors` tables.
//!
//! Every movie write runs in a single transaction spanning the movie row and
//! its actor associations: either the whole request is committed or nothing
//! is. There is no application-level locking, so two concurrent updates that
//! both replace the actor set of the same movie can interleave under READ
//! COMMITTED and the last commit wins.

use cinedex_core::catalog::{substring_pattern, MovieSort};
use cinedex_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use super::ActorRepo;
use crate::error::MutationError;
use crate::models::movie::{CreateMovie, MovieWithActors, UpdateMovie};
use crate::patch::PartialUpdate;
use crate::transaction::finish;

/// Patchable columns, in the order they appear in generated `SET` clauses.
const PATCH_COLUMNS: &[&str] = &["name", "description", "release_date", "rating"];

/// Movie columns plus the aggregated, name-ordered actor list.
///
/// Outer joins keep movies that have no actors (with an empty list). Callers
/// append `WHERE`, `GROUP BY m.movie_id` and `ORDER BY`.
const WITH_ACTORS_SELECT: &str = "\
    SELECT m.movie_id AS id, m.name, m.description, m.release_date, m.rating, \
           COALESCE( \
               array_agg(a.name::text ORDER BY a.name) FILTER (WHERE a.actor_id IS NOT NULL), \
               ARRAY[]::text[] \
           ) AS actors \
    FROM movies m \
    LEFT JOIN movies_actors ma ON ma.movie_id = m.movie_id \
    LEFT JOIN actors a ON a.actor_id = ma.actor_id";

/// Provides transactional writes and aggregated reads for movies.
pub struct MovieRepo;

impl MovieRepo {
    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a movie and one association row per supplied actor name.
    ///
    /// Every name must resolve to an existing actor; otherwise the whole
    /// create is rolled back with [`MutationError::UnknownActor`].
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<DbId, MutationError> {
        let mut tx = pool.begin().await?;
        let outcome = Self::create_inner(&mut tx, input).await;
        finish(tx, outcome).await
    }

    /// Patch the supplied movie fields and, if the patch carries a non-empty
    /// actor list, replace the movie's whole association set with it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<(), MutationError> {
        let mut tx = pool.begin().await?;
        let outcome = Self::update_inner(&mut tx, id, input).await;
        finish(tx, outcome).await
    }

    /// Delete a movie's associations and then the movie row, atomically.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), MutationError> {
        let mut tx = pool.begin().await?;
        let outcome = Self::delete_inner(&mut tx, id).await;
        finish(tx, outcome).await
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// List all movies with their actors, descending by the chosen key.
    pub async fn list_with_actors(
        pool: &PgPool,
        sort: MovieSort,
    ) -> Result<Vec<MovieWithActors>, sqlx::Error> {
        let order_column = sort.column();
        let query = format!(
            "{WITH_ACTORS_SELECT} \
             GROUP BY m.movie_id \
             ORDER BY {order_column} DESC, m.movie_id DESC"
        );
        sqlx::query_as::<_, MovieWithActors>(&query)
            .fetch_all(pool)
            .await
    }

    /// Movies whose title, or the name of any associated actor, contains
    /// `query` case-insensitively. Ordered like the default listing.
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<MovieWithActors>, sqlx::Error> {
        let sql = format!(
            "{WITH_ACTORS_SELECT} \
             WHERE m.name ILIKE $1 \
                OR EXISTS ( \
                    SELECT 1 \
                    FROM movies_actors sma \
                    JOIN actors sa ON sa.actor_id = sma.actor_id \
                    WHERE sma.movie_id = m.movie_id AND sa.name ILIKE $1 \
                ) \
             GROUP BY m.movie_id \
             ORDER BY m.rating DESC, m.movie_id DESC"
        );
        sqlx::query_as::<_, MovieWithActors>(&sql)
            .bind(substring_pattern(query))
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Transaction bodies
    // -----------------------------------------------------------------------

    async fn create_inner(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateMovie,
    ) -> Result<DbId, MutationError> {
        let movie_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movies (name, description, release_date, rating) \
             VALUES ($1, $2, $3, $4) \
             RETURNING movie_id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.release_date)
        .bind(input.rating)
        .fetch_one(&mut **tx)
        .await?;

        Self::insert_actors_inner(tx, movie_id, &input.actors).await?;
        Ok(movie_id)
    }

    async fn update_inner(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<(), MutationError> {
        let patch = PartialUpdate::new("movies", "movie_id", PATCH_COLUMNS)
            .set_opt("name", input.name.clone())
            .set_opt("description", input.description.clone())
            .set_opt("release_date", input.release_date)
            .set_opt("rating", input.rating);

        if patch.execute(&mut **tx, id).await? == 0 {
            return Err(MutationError::MovieNotFound(id));
        }

        if let Some(names) = input.replacement_actors() {
            sqlx::query("DELETE FROM movies_actors WHERE movie_id = $1")
                .bind(id)
                .execute(&mut **tx)
                .await?;
            Self::insert_actors_inner(tx, id, names).await?;
        }

        Ok(())
    }

    async fn delete_inner(
        tx: &mut Transaction<'_, Postgres>,
        id: DbId,
    ) -> Result<(), MutationError> {
        sqlx::query("DELETE FROM movies_actors WHERE movie_id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        let result = sqlx::query("DELETE FROM movies WHERE movie_id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(MutationError::MovieNotFound(id));
        }
        Ok(())
    }

    /// Resolve every name, then insert one association row per resolved id,
    /// preserving input order and duplicates.
    async fn insert_actors_inner(
        tx: &mut Transaction<'_, Postgres>,
        movie_id: DbId,
        names: &[String],
    ) -> Result<(), MutationError> {
        if names.is_empty() {
            return Ok(());
        }

        let mut actor_ids = Vec::with_capacity(names.len());
        for name in names {
            let actor_id = ActorRepo::resolve_id_by_name(&mut **tx, name)
                .await?
                .ok_or_else(|| MutationError::UnknownActor(name.clone()))?;
            actor_ids.push(actor_id);
        }

        sqlx::query(
            "INSERT INTO movies_actors (movie_id, actor_id) \
             SELECT $1, UNNEST($2::bigint[])",
        )
        .bind(movie_id)
        .bind(&actor_ids)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
