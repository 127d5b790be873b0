//! HTTP surface served in webhook mode
//!
//! The health route lives at `/`; webhook deliveries are routed by the
//! router teloxide builds, which is merged in by [`crate::bot`].

pub mod health;

use axum::{Router, routing::get};

pub use health::{health, HEALTH_BODY};

/// Router carrying the unauthenticated health route
pub fn router() -> Router {
    Router::new().route("/", get(health))
}
