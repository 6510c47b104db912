//! Guestbook comment data model.
//!
//! Comments are immutable once stored: the store assigns the identifier, the
//! service stamps the submission time, and no operation updates or deletes a
//! record afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length of an author name, in characters.
pub const AUTHOR_NAME_MAX: usize = 100;
/// Maximum length of a comment body, in characters.
pub const COMMENT_BODY_MAX: usize = 4000;

/// Validation errors returned by the comment value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentValidationError {
    /// Author name is empty once surrounding whitespace is trimmed.
    EmptyAuthor,
    /// Author name exceeds [`AUTHOR_NAME_MAX`] characters.
    AuthorTooLong {
        /// Maximum permitted length.
        max: usize,
    },
    /// Comment body is empty once surrounding whitespace is trimmed.
    EmptyBody,
    /// Comment body exceeds [`COMMENT_BODY_MAX`] characters.
    BodyTooLong {
        /// Maximum permitted length.
        max: usize,
    },
}

impl fmt::Display for CommentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAuthor => write!(f, "author name must not be empty"),
            Self::AuthorTooLong { max } => {
                write!(f, "author name must be at most {max} characters")
            }
            Self::EmptyBody => write!(f, "comment body must not be empty"),
            Self::BodyTooLong { max } => {
                write!(f, "comment body must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for CommentValidationError {}

/// Store-assigned unique comment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(i64);

impl CommentId {
    /// Wrap a raw store key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw store key value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of the comment author.
///
/// Surrounding whitespace is trimmed on construction, matching the submission
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorName(String);

impl AuthorName {
    /// Trim, validate, and construct an [`AuthorName`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CommentValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommentValidationError::EmptyAuthor);
        }
        if trimmed.chars().count() > AUTHOR_NAME_MAX {
            return Err(CommentValidationError::AuthorTooLong {
                max: AUTHOR_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for AuthorName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<AuthorName> for String {
    fn from(value: AuthorName) -> Self {
        value.0
    }
}

impl TryFrom<String> for AuthorName {
    type Error = CommentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Free-form comment text.
///
/// Surrounding whitespace is trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommentBody(String);

impl CommentBody {
    /// Trim, validate, and construct a [`CommentBody`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CommentValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CommentValidationError::EmptyBody);
        }
        if trimmed.chars().count() > COMMENT_BODY_MAX {
            return Err(CommentValidationError::BodyTooLong {
                max: COMMENT_BODY_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CommentBody {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CommentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CommentBody> for String {
    fn from(value: CommentBody) -> Self {
        value.0
    }
}

impl TryFrom<String> for CommentBody {
    type Error = CommentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored guestbook comment.
///
/// ## Invariants
/// - `id` is unique within the store and assigned on insert.
/// - `created_at` is the submission wall-clock time in milliseconds since the
///   Unix epoch; listings are ordered by it, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    id: CommentId,
    author: AuthorName,
    body: CommentBody,
    created_at: i64,
}

impl Comment {
    /// Assemble a [`Comment`] from validated components.
    #[must_use]
    pub const fn new(id: CommentId, author: AuthorName, body: CommentBody, created_at: i64) -> Self {
        Self {
            id,
            author,
            body,
            created_at,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Author display name.
    #[must_use]
    pub const fn author(&self) -> &AuthorName {
        &self.author
    }

    /// Comment text.
    #[must_use]
    pub const fn body(&self) -> &CommentBody {
        &self.body
    }

    /// Submission time in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn created_at(&self) -> i64 {
        self.created_at
    }
}

/// Comment awaiting insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Author display name.
    pub author: AuthorName,
    /// Comment text.
    pub body: CommentBody,
    /// Submission time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Raw comment submission as read from the request, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSubmission {
    /// Author name exactly as submitted.
    pub author: String,
    /// Comment text exactly as submitted.
    pub body: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Al", "Al")]
    #[case("  Al  ", "Al")]
    #[case("Ada Lovelace", "Ada Lovelace")]
    fn author_name_trims_surrounding_whitespace(#[case] raw: &str, #[case] expected: &str) {
        let name = AuthorName::new(raw).expect("valid author name");
        assert_eq!(name.as_ref(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn author_name_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(
            AuthorName::new(raw),
            Err(CommentValidationError::EmptyAuthor)
        );
    }

    #[test]
    fn author_name_rejects_overlong_input() {
        let raw = "a".repeat(AUTHOR_NAME_MAX + 1);
        assert_eq!(
            AuthorName::new(raw),
            Err(CommentValidationError::AuthorTooLong {
                max: AUTHOR_NAME_MAX
            })
        );
    }

    #[rstest]
    #[case(" hi ", "hi")]
    #[case("first post", "first post")]
    fn comment_body_trims_surrounding_whitespace(#[case] raw: &str, #[case] expected: &str) {
        let body = CommentBody::new(raw).expect("valid comment body");
        assert_eq!(body.as_ref(), expected);
    }

    #[test]
    fn comment_body_rejects_blank_input() {
        assert_eq!(CommentBody::new("  "), Err(CommentValidationError::EmptyBody));
    }

    #[test]
    fn comment_body_rejects_overlong_input() {
        let raw = "b".repeat(COMMENT_BODY_MAX + 1);
        assert_eq!(
            CommentBody::new(raw),
            Err(CommentValidationError::BodyTooLong {
                max: COMMENT_BODY_MAX
            })
        );
    }

    #[test]
    fn comment_accessors_expose_components() {
        let comment = Comment::new(
            CommentId::new(7),
            AuthorName::new("Al").expect("author"),
            CommentBody::new("hi").expect("body"),
            1_700_000_000_000,
        );
        assert_eq!(comment.id().value(), 7);
        assert_eq!(comment.author().as_ref(), "Al");
        assert_eq!(comment.body().as_ref(), "hi");
        assert_eq!(comment.created_at(), 1_700_000_000_000);
    }
}
