//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed comment repository using Diesel ORM
//! - **memory**: process-local comment repository for database-less runs
//! - **identity**: session-claims identity resolution
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod identity;
pub mod memory;
pub mod persistence;

pub use identity::SessionIdentityProvider;
pub use memory::InMemoryCommentRepository;
