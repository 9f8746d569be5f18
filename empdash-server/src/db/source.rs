//! Where handlers get employee records from.

use async_trait::async_trait;
use empdash_core::{DatabaseConfig, Record};

use super::{fetch_employees, DbError};

/// Fetch the complete employee table, in query order.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Record>, DbError>;
}

/// Postgres-backed source; one connection per fetch.
#[derive(Debug, Clone)]
pub struct PgEmployeeSource {
    config: DatabaseConfig,
}

impl PgEmployeeSource {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EmployeeSource for PgEmployeeSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, DbError> {
        fetch_employees(&self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn pg_source_reports_unreachable_database() {
        let source: Arc<dyn EmployeeSource> = Arc::new(PgEmployeeSource::new(DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..DatabaseConfig::default()
        }));

        // Handlers run on a multi-threaded runtime; the fetch future must be Send.
        let handle = tokio::spawn(async move { source.fetch_all().await });
        let err = handle.await.expect("task panicked").unwrap_err();
        assert!(matches!(err, DbError::Connect(_)));
    }
}
