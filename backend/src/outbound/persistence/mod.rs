//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the Diesel-backed [`crate::domain::ports::CommentRepository`]
//! implementation with async support through `diesel-async` and `bb8`
//! connection pooling. Row structs and schema definitions are internal; the
//! domain only ever sees [`crate::domain::Comment`] values.

mod diesel_comment_repository;
mod models;
mod pool;
mod schema;

pub use diesel_comment_repository::DieselCommentRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
