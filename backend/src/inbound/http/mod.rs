//! HTTP inbound adapter exposing the guestbook endpoints.

pub mod error;
pub mod guestbook;
pub mod health;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
