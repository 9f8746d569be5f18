//! HTTP layer
//!
//! Axum server with:
//! - HTML dashboard at `/`
//! - JSON mirror at `/api/employees`
//! - Localhost-only CORS by default
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod page;
pub mod routes;
pub mod server;

pub use error::{ApiError, PageError};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
