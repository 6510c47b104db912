//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{GuestbookCommand, GuestbookQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use guestbook_backend::domain::ports::{FixtureGuestbookCommand, FixtureGuestbookQuery};
/// use guestbook_backend::inbound::http::state::HttpState;
///
/// let state = HttpState {
///     query: Arc::new(FixtureGuestbookQuery),
///     command: Arc::new(FixtureGuestbookCommand),
/// };
/// let _query = state.query.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Listing use-case port.
    pub query: Arc<dyn GuestbookQuery>,
    /// Posting use-case port.
    pub command: Arc<dyn GuestbookCommand>,
}
