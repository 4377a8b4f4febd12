//! Repository implementations for the users and circles service.
//!
//! - [`memory`]: an explicit in-memory store for tests and local runs
//! - [`postgres`]: a PostgreSQL adapter built on sqlx

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryCircleRepository, InMemoryStore, InMemoryUserRepository};
pub use postgres::{PostgresCircleRepository, PostgresUserRepository, run_migrations};
