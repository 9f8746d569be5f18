//! empdash-server: employee data access and the HTML dashboard.
//!
//! The data path per render is linear: connect, run the fixed query, fetch
//! every row, close, render.

pub mod db;
pub mod http;

pub use db::{fetch_employees, DbError, EmployeeSource, PgEmployeeSource};
pub use http::{run_server, ServerConfig, ServerError};
