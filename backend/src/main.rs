//! Backend entry-point: wires the guestbook endpoints, health probes, and
//! OpenAPI docs.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use guestbook_backend::inbound::http::health::HealthState;
use guestbook_backend::outbound::identity::{DEFAULT_LOGIN_URL, DEFAULT_LOGOUT_URL};
use guestbook_backend::outbound::persistence::{DbPool, PoolConfig};
use server::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    let key = match std::fs::read(&key_path) {
        Ok(bytes) => Key::derive_from(&bytes),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Key::generate()
            } else {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )));
            }
        }
    };

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let bind_addr: SocketAddr = match env::var("BIND_ADDR") {
        Ok(raw) => raw
            .parse()
            .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR {raw}: {e}")))?,
        Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
    };

    let login_url = env::var("LOGIN_URL").unwrap_or_else(|_| DEFAULT_LOGIN_URL.into());
    let logout_url = env::var("LOGOUT_URL").unwrap_or_else(|_| DEFAULT_LOGOUT_URL.into());

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr)
        .with_identity_urls(login_url, logout_url);

    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
            info!("comments stored in PostgreSQL");
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; comments stored in process memory");
        }
    }

    info!(addr = %config.bind_addr(), "starting guestbook backend");
    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, config)?;
    server.await
}
