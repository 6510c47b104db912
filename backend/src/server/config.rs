//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use guestbook_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) login_url: String,
    pub(crate) logout_url: String,
}

impl ServerConfig {
    /// Construct a server configuration with the given session settings.
    ///
    /// Identity-layer endpoints default to `/auth/login` and `/auth/logout`;
    /// storage defaults to the in-memory repository until a pool is attached.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            login_url: guestbook_backend::outbound::identity::DEFAULT_LOGIN_URL.to_owned(),
            logout_url: guestbook_backend::outbound::identity::DEFAULT_LOGOUT_URL.to_owned(),
        }
    }

    /// Attach a database connection pool for the persistence adapter.
    ///
    /// When provided, comments are stored in PostgreSQL instead of process
    /// memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Override the identity-layer login and logout endpoints.
    #[must_use]
    pub fn with_identity_urls(
        mut self,
        login_url: impl Into<String>,
        logout_url: impl Into<String>,
    ) -> Self {
        self.login_url = login_url.into();
        self.logout_url = logout_url.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
