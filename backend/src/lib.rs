//! Guestbook backend library.
//!
//! A small comment service arranged hexagonally: the [`domain`] module holds
//! the comment model, validation, and the driving/driven ports; [`inbound`]
//! adapts HTTP requests onto the domain services; [`outbound`] supplies
//! identity and storage adapters (in-memory and PostgreSQL via Diesel).

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware applied around all routes.
pub use middleware::Trace;
