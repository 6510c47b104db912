//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use guestbook_backend::Trace;
#[cfg(debug_assertions)]
use guestbook_backend::doc::ApiDoc;
use guestbook_backend::domain::CommentService;
use guestbook_backend::inbound::http::guestbook::{list_feed, post_comment};
use guestbook_backend::inbound::http::health::{HealthState, live, ready};
use guestbook_backend::inbound::http::state::HttpState;
use guestbook_backend::outbound::persistence::DieselCommentRepository;
use guestbook_backend::outbound::{InMemoryCommentRepository, SessionIdentityProvider};

/// Build the HTTP state, choosing the storage adapter from the configuration.
///
/// A configured database pool selects the Diesel-backed repository; without
/// one, comments live in process memory.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let identity = Arc::new(SessionIdentityProvider::new(
        config.login_url.clone(),
        config.logout_url.clone(),
    ));
    let clock = Arc::new(DefaultClock);

    match &config.db_pool {
        Some(pool) => {
            let service = Arc::new(CommentService::new(
                Arc::new(DieselCommentRepository::new(pool.clone())),
                identity,
                clock,
            ));
            HttpState {
                query: service.clone(),
                command: service,
            }
        }
        None => {
            let service = Arc::new(CommentService::new(
                Arc::new(InMemoryCommentRepository::new()),
                identity,
                clock,
            ));
            HttpState {
                query: service.clone(),
                command: service,
            }
        }
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(same_site)
        .build();

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .wrap(session)
        .service(list_feed)
        .service(post_comment)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
        login_url: _,
        logout_url: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
