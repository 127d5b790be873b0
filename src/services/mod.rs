//! Services module
//!
//! This module contains the services that talk to the outside world

pub mod notification;

// Re-export commonly used services
pub use notification::{Outbox, DeliveryReport};
