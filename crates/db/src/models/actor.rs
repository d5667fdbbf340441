//! Actor entity model and DTOs.

use cinedex_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub sex: String,
    pub date_of_birth: Date,
}

/// An actor with the titles of every movie it is associated with.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActorWithMovies {
    pub id: DbId,
    pub name: String,
    pub sex: String,
    pub date_of_birth: Date,
    pub movies: Vec<String>,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub name: String,
    pub sex: String,
    pub date_of_birth: Date,
}

/// DTO for patching an actor. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub sex: Option<String>,
    pub date_of_birth: Option<Date>,
}
