//! Handlers for the `/movies` resource.
//!
//! Writes require the admin role and are validated field by field before the
//! repository opens its transaction. Reads return movies with their actor
//! names aggregated into a single list.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::catalog::MovieSort;
use cinedex_core::error::CoreError;
use cinedex_core::validation::{
    parse_date, supplied, validate_description, validate_name, validate_rating,
};
use cinedex_db::models::movie::{CreateMovie, MovieWithActors, UpdateMovie};
use cinedex_db::repositories::MovieRepo;
use serde::Deserialize;

use super::{json_body, query_params};
use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::{IdParams, SearchParams, SortParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body shared by create and update.
///
/// Every field is optional on the wire; an empty string counts as absent.
/// `rating` is a decimal string (e.g. `"8.8"`) and dates are `YYYY-MM-DD`.
#[derive(Debug, Default, Deserialize)]
pub struct MovieRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub rating: Option<String>,
    pub actors: Option<Vec<String>>,
}

impl MovieRequest {
    /// Validate a create request: every field is mandatory except the
    /// description (which may be empty) and the actor list.
    pub fn into_create(self) -> Result<CreateMovie, CoreError> {
        let name = self.name.unwrap_or_default();
        validate_name(&name)?;

        let description = self.description.unwrap_or_default();
        validate_description(&description)?;

        let release_date = match supplied(&self.release_date) {
            Some(raw) => parse_date("release_date", raw)?,
            None => {
                return Err(CoreError::Validation("release_date is required".into()));
            }
        };

        let rating = validate_rating(self.rating.as_deref().unwrap_or_default())?;

        Ok(CreateMovie {
            name,
            description,
            release_date,
            rating,
            actors: self.actors.unwrap_or_default(),
        })
    }

    /// Validate an update request: only supplied fields are checked.
    pub fn into_update(self) -> Result<UpdateMovie, CoreError> {
        let name = supplied(&self.name).map(str::to_owned);
        if let Some(name) = &name {
            validate_name(name)?;
        }

        let description = supplied(&self.description).map(str::to_owned);
        if let Some(description) = &description {
            validate_description(description)?;
        }

        let release_date = supplied(&self.release_date)
            .map(|raw| parse_date("release_date", raw))
            .transpose()?;

        let rating = supplied(&self.rating).map(validate_rating).transpose()?;

        Ok(UpdateMovie {
            name,
            description,
            release_date,
            rating,
            actors: self.actors,
        })
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/movies/create
///
/// Create a movie and associate it with the named (pre-existing) actors.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let input = json_body(payload)?.into_create()?;

    let movie_id = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(
        movie_id,
        actor_count = input.actors.len(),
        user = %admin.username,
        "Movie created"
    );
    Ok(StatusCode::CREATED)
}

/// GET|POST /api/v1/movies/update?id={id}
///
/// Patch the supplied fields. A non-empty `actors` list replaces the movie's
/// whole actor set; an absent or empty list leaves it unchanged.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let IdParams { id } = query_params(params)?;
    let input = json_body(payload)?.into_update()?;

    MovieRepo::update(&state.pool, id, &input).await?;

    tracing::info!(
        movie_id = id,
        replaced_actors = input.replacement_actors().is_some(),
        user = %admin.username,
        "Movie updated"
    );
    Ok(StatusCode::OK)
}

/// POST /api/v1/movies/delete?id={id}
///
/// Delete a movie and all of its actor associations.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> AppResult<StatusCode> {
    let IdParams { id } = query_params(params)?;

    MovieRepo::delete(&state.pool, id).await?;

    tracing::info!(movie_id = id, user = %admin.username, "Movie deleted");
    Ok(StatusCode::OK)
}

/// GET /api/v1/movies?sort={title|release_date|rating}
///
/// List every movie with its actors, descending by the sort key (rating by
/// default).
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> AppResult<Json<Vec<MovieWithActors>>> {
    let SortParams { sort } = query_params(params)?;
    let sort = MovieSort::from_param(sort.as_deref());

    let movies = MovieRepo::list_with_actors(&state.pool, sort).await?;
    tracing::debug!(count = movies.len(), ?sort, "Listed movies");
    Ok(Json(movies))
}

/// GET /api/v1/movies/search?query={text}
///
/// Movies whose title or any actor name contains `query`, ignoring case.
/// Zero matches is a 404, not an empty array.
pub async fn search(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<Vec<MovieWithActors>>> {
    let SearchParams { query } = query_params(params)?;

    let movies = MovieRepo::search(&state.pool, &query).await?;
    if movies.is_empty() {
        return Err(CoreError::NoMatches(format!("No movies match '{query}'")).into());
    }

    tracing::debug!(count = movies.len(), %query, "Searched movies");
    Ok(Json(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn full_request() -> MovieRequest {
        MovieRequest {
            name: Some("Inception".into()),
            description: Some("Dreams".into()),
            release_date: Some("2010-07-16".into()),
            rating: Some("8.8".into()),
            actors: Some(vec!["Leonardo DiCaprio".into()]),
        }
    }

    #[test]
    fn create_accepts_complete_request() {
        let input = full_request().into_create().unwrap();
        assert_eq!(input.name, "Inception");
        assert_eq!(input.rating, 8.8);
        assert_eq!(input.release_date.to_string(), "2010-07-16");
        assert_eq!(input.actors, vec!["Leonardo DiCaprio"]);
    }

    #[test]
    fn create_allows_missing_description_and_actors() {
        let input = MovieRequest {
            description: None,
            actors: None,
            ..full_request()
        }
        .into_create()
        .unwrap();
        assert_eq!(input.description, "");
        assert!(input.actors.is_empty());
    }

    #[test]
    fn create_rejects_each_invalid_field() {
        let cases = [
            MovieRequest {
                name: None,
                ..full_request()
            },
            MovieRequest {
                name: Some("x".repeat(151)),
                ..full_request()
            },
            MovieRequest {
                description: Some("d".repeat(1001)),
                ..full_request()
            },
            MovieRequest {
                release_date: None,
                ..full_request()
            },
            MovieRequest {
                release_date: Some("July 16".into()),
                ..full_request()
            },
            MovieRequest {
                rating: None,
                ..full_request()
            },
            MovieRequest {
                rating: Some("10.1".into()),
                ..full_request()
            },
        ];
        for request in cases {
            assert_matches!(request.into_create(), Err(CoreError::Validation(_)));
        }
    }

    #[test]
    fn update_treats_empty_strings_as_absent() {
        let input = MovieRequest {
            name: Some(String::new()),
            description: Some(String::new()),
            release_date: Some(String::new()),
            rating: Some("7".into()),
            actors: None,
        }
        .into_update()
        .unwrap();
        assert_eq!(input.name, None);
        assert_eq!(input.description, None);
        assert_eq!(input.release_date, None);
        assert_eq!(input.rating, Some(7.0));
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        assert!(MovieRequest::default().into_update().is_ok());
        assert_matches!(
            MovieRequest {
                rating: Some("abc".into()),
                ..Default::default()
            }
            .into_update(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn update_keeps_actor_list_for_replacement() {
        let input = MovieRequest {
            actors: Some(vec!["Tom Hardy".into()]),
            ..Default::default()
        }
        .into_update()
        .unwrap();
        assert_eq!(input.replacement_actors(), Some(&["Tom Hardy".to_string()][..]));

        let input = MovieRequest {
            actors: Some(vec![]),
            ..Default::default()
        }
        .into_update()
        .unwrap();
        assert_eq!(input.replacement_actors(), None);
    }
}
