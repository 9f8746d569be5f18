//! Route handlers organized by resource

pub mod dashboard;
pub mod employees;
pub mod health;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use empdash_core::{CellValue, Record};
    use tower::ServiceExt;

    use crate::db::{DbError, EmployeeSource};
    use crate::http::AppState;

    /// Fixed in-memory table.
    pub struct StaticSource(pub Vec<Record>);

    #[async_trait]
    impl EmployeeSource for StaticSource {
        async fn fetch_all(&self) -> Result<Vec<Record>, DbError> {
            Ok(self.0.clone())
        }
    }

    /// Behaves like an unreachable database.
    pub struct DownSource;

    #[async_trait]
    impl EmployeeSource for DownSource {
        async fn fetch_all(&self) -> Result<Vec<Record>, DbError> {
            Err(DbError::Connect(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))))
        }
    }

    pub fn alice_and_bob() -> Vec<Record> {
        vec![
            Record::new(vec![CellValue::Integer(1), CellValue::Text("Alice".into())]),
            Record::new(vec![CellValue::Integer(2), CellValue::Text("Bob".into())]),
        ]
    }

    pub fn state(source: impl EmployeeSource + 'static) -> AppState {
        AppState::new(Arc::new(source))
    }

    pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}
