//! Error responses for the JSON API and the HTML dashboard.
//!
//! Database failures are logged in full and answered with a generic message.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use empdash_core::DashError;
use serde_json::json;

use super::page;
use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "employee data is unavailable"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

/// Dashboard failure: an HTML page with no row output.
#[derive(Debug)]
pub enum PageError {
    /// Fetch failed (500, logged)
    Database(DbError),

    /// Writing to the page surface failed (500, logged)
    Render(DashError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::Render(e) => tracing::error!("Dashboard render failed: {}", e),
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(page::error_page("employee data is unavailable")),
        )
            .into_response()
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<DashError> for PageError {
    fn from(e: DashError) -> Self {
        Self::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn refused() -> DbError {
        DbError::Connect(sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    #[tokio::test]
    async fn database_error_is_500_with_generic_message() {
        let response = ApiError::from(refused()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("internal_error"));
        assert!(!body.contains("refused"));
    }

    #[tokio::test]
    async fn page_error_is_html_500() {
        let response = PageError::from(refused()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/html"));
    }
}
