//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.
//!
//! This adapter translates between Diesel rows and domain comments. The
//! database sequence assigns identifiers and the `ORDER BY` clause supplies
//! the most-recent-first listing order the domain expects.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{CommentRepository, CommentRepositoryError};
use crate::domain::{Comment, NewComment};

use super::models::{CommentRow, NewCommentRow};
use super::pool::{DbPool, PoolError};
use super::schema::comments;

/// Diesel-backed implementation of the `CommentRepository` port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain comment repository errors.
fn map_pool_error(error: PoolError) -> CommentRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CommentRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain comment repository errors.
fn map_diesel_error(error: diesel::result::Error) -> CommentRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CommentRepositoryError::connection("database connection error")
        }
        _ => CommentRepositoryError::query("database error"),
    }
}

fn map_row(row: CommentRow) -> Result<Comment, CommentRepositoryError> {
    let id = row.id;
    row.into_domain().map_err(|err| {
        debug!(comment_id = id, %err, "stored comment violates domain constraints");
        CommentRepositoryError::query("stored comment is malformed")
    })
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn list_comments(&self) -> Result<Vec<Comment>, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CommentRow> = comments::table
            .order((comments::timestamp.desc(), comments::id.desc()))
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(map_row).collect()
    }

    async fn insert_comment(&self, draft: NewComment) -> Result<Comment, CommentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCommentRow {
            name: draft.author.as_ref(),
            text: draft.body.as_ref(),
            timestamp: draft.created_at,
        };

        let stored: CommentRow = diesel::insert_into(comments::table)
            .values(&row)
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        map_row(stored)
    }
}
