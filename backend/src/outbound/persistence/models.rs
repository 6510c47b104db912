//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{AuthorName, Comment, CommentBody, CommentId, CommentValidationError};

use super::schema::comments;

/// Row struct for reading from the comments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: i64,
    pub name: String,
    pub text: String,
    pub timestamp: i64,
}

impl CommentRow {
    /// Convert a stored row into a domain [`Comment`].
    ///
    /// Fails only when a row violates the domain constraints, which means the
    /// table was written by something other than this service.
    pub(crate) fn into_domain(self) -> Result<Comment, CommentValidationError> {
        Ok(Comment::new(
            CommentId::new(self.id),
            AuthorName::new(&self.name)?,
            CommentBody::new(&self.text)?,
            self.timestamp,
        ))
    }
}

/// Insertable struct for creating new comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn row_converts_into_domain_comment() {
        let row = CommentRow {
            id: 7,
            name: "Al".to_owned(),
            text: "first post".to_owned(),
            timestamp: 1_700_000_000_000,
        };

        let comment = row.into_domain().expect("valid row");
        assert_eq!(comment.id().value(), 7);
        assert_eq!(comment.author().as_ref(), "Al");
        assert_eq!(comment.body().as_ref(), "first post");
        assert_eq!(comment.created_at(), 1_700_000_000_000);
    }

    #[test]
    fn blank_row_is_rejected() {
        let row = CommentRow {
            id: 7,
            name: String::new(),
            text: "hi".to_owned(),
            timestamp: 0,
        };

        assert_eq!(
            row.into_domain(),
            Err(CommentValidationError::EmptyAuthor)
        );
    }
}
