//! Single-connection access to the employees table.

use empdash_core::{DatabaseConfig, Record};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Executor};
use tracing::{debug, warn};

use super::{decode_row, DbError};

/// The one query this program runs.
pub const EMPLOYEE_QUERY: &str = "SELECT * FROM employees;";

/// Build driver options from the resolved configuration.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.dbname)
        .username(&config.user)
        .password(&config.password)
}

/// Connect, fetch every employee row, close.
///
/// The connection is closed whether or not the query succeeded.
pub async fn fetch_employees(config: &DatabaseConfig) -> Result<Vec<Record>, DbError> {
    let mut conn = PgConnection::connect_with(&connect_options(config))
        .await
        .map_err(DbError::Connect)?;
    debug!(host = %config.host, dbname = %config.dbname, "Connected to database");

    let result = query_employees(&mut conn).await;

    // A failed close must not mask the query outcome.
    if let Err(e) = conn.close().await {
        warn!(error = %e, "Failed to close database connection");
    } else {
        debug!("Database connection closed");
    }

    result
}

/// Run the employee query on an open connection.
pub async fn query_employees(conn: &mut PgConnection) -> Result<Vec<Record>, DbError> {
    let rows = Executor::fetch_all(&mut *conn, sqlx::raw_sql(EMPLOYEE_QUERY))
        .await
        .map_err(DbError::Query)?;

    let records = rows.iter().map(decode_row).collect::<Result<Vec<_>, _>>()?;
    debug!(rows = records.len(), "Fetched employee rows");
    Ok(records)
}
