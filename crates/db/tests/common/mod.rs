//! Read-back helpers shared by the repository integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use cinedex_core::catalog::MovieSort;
use cinedex_db::models::actor::Actor;
use cinedex_db::models::movie::MovieWithActors;
use cinedex_db::repositories::MovieRepo;
use sqlx::PgPool;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A movie as the catalog listing returns it, or `None` once deleted.
pub async fn find_movie(pool: &PgPool, id: i64) -> Option<MovieWithActors> {
    MovieRepo::list_with_actors(pool, MovieSort::Rating)
        .await
        .unwrap()
        .into_iter()
        .find(|m| m.id == id)
}

/// Raw association rows for a movie, ordered by actor id.
pub async fn actor_ids(pool: &PgPool, movie_id: i64) -> Vec<i64> {
    sqlx::query_scalar("SELECT actor_id FROM movies_actors WHERE movie_id = $1 ORDER BY actor_id")
        .bind(movie_id)
        .fetch_all(pool)
        .await
        .unwrap()
}

pub async fn find_actor(pool: &PgPool, id: i64) -> Option<Actor> {
    sqlx::query_as::<_, Actor>(
        "SELECT actor_id AS id, name, sex, date_of_birth FROM actors WHERE actor_id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .unwrap()
}

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
