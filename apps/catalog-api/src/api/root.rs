//! Liveness message, greeting and store diagnostics

use axum::{extract::State, routing::get, Json, Router};
use core_config::env_first_of;
use database::mongodb::{DATABASE_VARS, URL_VARS};
use domain_catalog::{error::truncate_message, StoreDiagnostics};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

/// Longest store error text shown by the diagnostics endpoint
const MAX_DIAGNOSTIC_ERROR_LEN: usize = 50;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Human-readable connectivity report
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    /// Whether the connection string is set; null without a database
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    /// At most ten collection names
    pub collections: Vec<String>,
}

fn set_flag(is_set: bool) -> String {
    let flag = if is_set { "✅ Set" } else { "❌ Not Set" };
    flag.to_string()
}

impl DiagnosticsResponse {
    pub fn from_diagnostics(diagnostics: StoreDiagnostics, url_set: bool, name_set: bool) -> Self {
        let mut report = Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        if !diagnostics.available {
            report.database = "⚠️  Available but not initialized".to_string();
            return report;
        }

        report.database_url = Some(set_flag(url_set));
        report.database_name = Some(set_flag(name_set));

        match diagnostics.collections {
            Ok(collections) => {
                report.database = "✅ Connected & Working".to_string();
                report.connection_status = "Connected".to_string();
                report.collections = collections;
            }
            Err(e) => {
                report.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate_message(&e, MAX_DIAGNOSTIC_ERROR_LEN)
                );
            }
        }

        report
    }
}

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses((status = 200, description = "Backend is running", body = MessageResponse))
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Clothing Store Backend is running".to_string(),
    })
}

/// Static greeting
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Service",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

/// Backend and database status
#[utoipa::path(
    get,
    path = "/test",
    tag = "Service",
    responses((status = 200, description = "Diagnostic report", body = DiagnosticsResponse))
)]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let diagnostics = state.catalog.diagnostics().await;

    Json(DiagnosticsResponse::from_diagnostics(
        diagnostics,
        env_first_of(&URL_VARS).is_some(),
        env_first_of(&DATABASE_VARS).is_some(),
    ))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(diagnostics))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::offline_state;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[test]
    fn test_report_without_database() {
        let report = DiagnosticsResponse::from_diagnostics(
            StoreDiagnostics {
                available: false,
                collections: Ok(Vec::new()),
            },
            false,
            false,
        );

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "⚠️  Available but not initialized");
        assert_eq!(report.database_url, None);
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.collections.is_empty());
    }

    #[test]
    fn test_report_connected() {
        let report = DiagnosticsResponse::from_diagnostics(
            StoreDiagnostics {
                available: true,
                collections: Ok(vec!["product".to_string()]),
            },
            true,
            true,
        );

        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.database_url.as_deref(), Some("✅ Set"));
        assert_eq!(report.database_name.as_deref(), Some("✅ Set"));
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections, vec!["product"]);
    }

    #[test]
    fn test_report_truncates_listing_error() {
        let report = DiagnosticsResponse::from_diagnostics(
            StoreDiagnostics {
                available: true,
                collections: Err("x".repeat(200)),
            },
            true,
            false,
        );

        let prefix = "⚠️  Connected but Error: ";
        assert!(report.database.starts_with(prefix));
        assert_eq!(report.database[prefix.len()..].chars().count(), 50);
        assert_eq!(report.database_name.as_deref(), Some("❌ Not Set"));
        assert_eq!(report.connection_status, "Not Connected");
    }

    #[tokio::test]
    async fn test_diagnostics_endpoint_without_database() {
        let response = router(offline_state())
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: DiagnosticsResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.database, "⚠️  Available but not initialized");
        assert_eq!(body.connection_status, "Not Connected");
        assert_eq!(body.collections, Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_messages() {
        assert_eq!(read_root().await.0.message, "Clothing Store Backend is running");
        assert_eq!(hello().await.0.message, "Hello from the backend API!");
    }
}
