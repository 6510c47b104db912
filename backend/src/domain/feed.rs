//! Listing limits and the feed page returned by the comment service.

use std::fmt;
use std::str::FromStr;

use crate::domain::{CallerIdentity, Comment};

/// Error raised when the `size` parameter is neither `all` nor a
/// non-negative integer.
///
/// The original service crashed on unparseable input; this reimplementation
/// reports it as a validation failure instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLimitParseError {
    raw: String,
}

impl ListingLimitParseError {
    /// The rejected parameter value.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }
}

impl fmt::Display for ListingLimitParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size must be \"all\" or a non-negative integer, got {:?}",
            self.raw
        )
    }
}

impl std::error::Error for ListingLimitParseError {}

/// Client-requested bound on the number of comments in a listing response.
///
/// The bound excludes the identity payload the HTTP adapter prepends.
///
/// # Examples
/// ```
/// use guestbook_backend::domain::ListingLimit;
///
/// assert_eq!("all".parse::<ListingLimit>(), Ok(ListingLimit::All));
/// assert_eq!("2".parse::<ListingLimit>(), Ok(ListingLimit::Count(2)));
/// assert!("two".parse::<ListingLimit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingLimit {
    /// Return every stored comment.
    All,
    /// Return at most this many of the most recent comments.
    Count(usize),
}

impl ListingLimit {
    /// Number of comments to keep out of `total` stored ones.
    #[must_use]
    pub const fn keep(self, total: usize) -> usize {
        match self {
            Self::All => total,
            Self::Count(count) => {
                if count > total {
                    total
                } else {
                    count
                }
            }
        }
    }

    /// Parse an optional query parameter; an absent parameter means `All`.
    pub fn from_query(raw: Option<&str>) -> Result<Self, ListingLimitParseError> {
        match raw {
            None => Ok(Self::All),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for ListingLimit {
    type Err = ListingLimitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<usize>()
            .map(Self::Count)
            .map_err(|_| ListingLimitParseError { raw: s.to_owned() })
    }
}

/// Outcome of a listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedPage {
    /// The caller is not signed in; comments stay gated behind the login URL.
    LoginRequired {
        /// URL the caller should be sent to for sign-in.
        login_url: String,
    },
    /// Identity metadata plus the limited comment listing, most recent first.
    Entries {
        /// Resolved identity of the authenticated caller.
        caller: CallerIdentity,
        /// Comments ordered by submission time descending.
        comments: Vec<Comment>,
    },
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, ListingLimit::All)]
    #[case(Some("all"), ListingLimit::All)]
    #[case(Some("0"), ListingLimit::Count(0))]
    #[case(Some("17"), ListingLimit::Count(17))]
    fn from_query_accepts_valid_values(#[case] raw: Option<&str>, #[case] expected: ListingLimit) {
        assert_eq!(ListingLimit::from_query(raw), Ok(expected));
    }

    #[rstest]
    #[case("two")]
    #[case("-1")]
    #[case("")]
    #[case("ALL")]
    fn from_query_rejects_unparseable_values(#[case] raw: &str) {
        let err = ListingLimit::from_query(Some(raw)).expect_err("unparseable size");
        assert_eq!(err.raw(), raw);
    }

    #[rstest]
    #[case(ListingLimit::All, 5, 5)]
    #[case(ListingLimit::Count(2), 5, 2)]
    #[case(ListingLimit::Count(10), 5, 5)]
    #[case(ListingLimit::Count(0), 5, 0)]
    #[case(ListingLimit::All, 0, 0)]
    fn keep_bounds_by_total(#[case] limit: ListingLimit, #[case] total: usize, #[case] expected: usize) {
        assert_eq!(limit.keep(total), expected);
    }
}
