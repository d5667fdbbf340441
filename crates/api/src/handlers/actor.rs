//! Handlers for the `/actors` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::validation::{parse_date, supplied, validate_name};
use cinedex_db::models::actor::{ActorWithMovies, CreateActor, UpdateActor};
use cinedex_db::repositories::ActorRepo;
use serde::Deserialize;

use super::{json_body, query_params};
use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::IdParams;
use crate::state::AppState;

/// Request body shared by actor create and update. Empty strings count as
/// absent.
#[derive(Debug, Default, Deserialize)]
pub struct ActorRequest {
    pub name: Option<String>,
    pub sex: Option<String>,
    pub date_of_birth: Option<String>,
}

impl ActorRequest {
    pub fn into_create(self) -> Result<CreateActor, CoreError> {
        let name = self.name.unwrap_or_default();
        validate_name(&name)?;

        let sex = supplied(&self.sex)
            .map(str::to_owned)
            .ok_or_else(|| CoreError::Validation("sex is required".into()))?;

        let date_of_birth = match supplied(&self.date_of_birth) {
            Some(raw) => parse_date("date_of_birth", raw)?,
            None => {
                return Err(CoreError::Validation("date_of_birth is required".into()));
            }
        };

        Ok(CreateActor {
            name,
            sex,
            date_of_birth,
        })
    }

    pub fn into_update(self) -> Result<UpdateActor, CoreError> {
        let name = supplied(&self.name).map(str::to_owned);
        if let Some(name) = &name {
            validate_name(name)?;
        }

        Ok(UpdateActor {
            name,
            sex: supplied(&self.sex).map(str::to_owned),
            date_of_birth: supplied(&self.date_of_birth)
                .map(|raw| parse_date("date_of_birth", raw))
                .transpose()?,
        })
    }
}

/// POST /api/v1/actors/create
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    payload: Result<Json<ActorRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let input = json_body(payload)?.into_create()?;

    let actor = ActorRepo::create(&state.pool, &input).await?;

    tracing::info!(actor_id = actor.id, user = %admin.username, "Actor created");
    Ok(StatusCode::CREATED)
}

/// GET|POST /api/v1/actors/update?id={id}
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
    payload: Result<Json<ActorRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let IdParams { id } = query_params(params)?;
    let input = json_body(payload)?.into_update()?;

    ActorRepo::update(&state.pool, id, &input).await?;

    tracing::info!(actor_id = id, user = %admin.username, "Actor updated");
    Ok(StatusCode::OK)
}

/// POST /api/v1/actors/delete?id={id}
///
/// Associations with movies are removed by the cascading foreign key; the
/// movies themselves remain.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> AppResult<StatusCode> {
    let IdParams { id } = query_params(params)?;

    ActorRepo::delete(&state.pool, id).await?;

    tracing::info!(actor_id = id, user = %admin.username, "Actor deleted");
    Ok(StatusCode::OK)
}

/// GET /api/v1/actors
pub async fn list(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ActorWithMovies>>> {
    let actors = ActorRepo::list_with_movies(&state.pool).await?;
    Ok(Json(actors))
}
