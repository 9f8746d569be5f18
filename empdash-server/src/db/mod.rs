//! Data access: one connection, one fixed query, all rows in memory.
//!
//! # Design Principles
//!
//! - No pool: each fetch opens its own connection and closes it on every path
//! - Simple query protocol, so every column arrives as text
//! - No retries; failures go back to the caller as `DbError`

pub mod connection;
pub mod decode;
pub mod source;

pub use connection::{connect_options, fetch_employees, query_employees, EMPLOYEE_QUERY};
pub use decode::decode_row;
pub use source::{EmployeeSource, PgEmployeeSource};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("employee query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("failed to decode employee row: {0}")]
    Decode(#[source] sqlx::Error),
}
