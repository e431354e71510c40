//! REST API module
//!
//! The backend is an external contract: base path `/api`, bearer token
//! auth, JSON bodies. One endpoint module per resource.

pub mod auth;
pub mod client;
pub mod events;
pub mod groups;
pub mod messages;
pub mod organizations;

pub use client::{ApiClient, TOKEN_EXPIRED_MESSAGE};

use serde::Deserialize;

/// Acknowledgement body for mutations whose payload the client does not
/// consume (registration state is always re-derived from `/auth/me`).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
