//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement writes open their
//! own transaction.

pub mod actor_repo;
pub mod movie_repo;
pub mod user_repo;

pub use actor_repo::ActorRepo;
pub use movie_repo::MovieRepo;
pub use user_repo::UserRepo;
