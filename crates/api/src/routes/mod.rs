//! HTTP route handlers.

pub mod circles;
pub mod health;
pub mod metrics;
pub mod users;
