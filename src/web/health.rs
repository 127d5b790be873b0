//! Health check endpoint for the hosting platform.
//!
//! Liveness only: answers 200 whenever the process can serve HTTP.

/// Body returned by `GET /`
pub const HEALTH_BODY: &str = "✅ Bot is alive";

/// Health check handler.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
