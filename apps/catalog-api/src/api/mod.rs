//! API routes module

pub mod catalog;
pub mod health;
pub mod root;

use axum::{routing::get, Router};
use axum_helpers::health_router;

use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/hello", get(root::hello))
        .merge(catalog::router(state))
}

/// Routes served at the top level
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root::read_root))
        .merge(root::router(state.clone()))
        .merge(health::router(state.clone()))
        .merge(health_router(state.config.app))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use core_config::{app_info, server::ServerConfig};

    /// State for a service started without a database
    pub fn offline_state() -> AppState {
        AppState::new(
            Config {
                app: app_info!(),
                mongodb: None,
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::create_router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = test_support::offline_state();
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<ApiDoc>(routes(&state), root_routes(&state)).unwrap()
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_and_hello() {
        assert_eq!(
            get_json("/").await,
            (
                StatusCode::OK,
                json!({"message": "Clothing Store Backend is running"})
            )
        );
        assert_eq!(
            get_json("/api/hello").await,
            (StatusCode::OK, json!({"message": "Hello from the backend API!"}))
        );
    }

    #[tokio::test]
    async fn test_offline_catalog_endpoints() {
        assert_eq!(get_json("/api/products").await, (StatusCode::OK, json!([])));
        assert_eq!(get_json("/api/categories").await, (StatusCode::OK, json!([])));

        let (status, body) = get_json("/api/products/65a1b2c3d4e5f6a7b8c9d0e1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Database not available");
    }

    #[tokio::test]
    async fn test_health_and_unknown_route() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "catalog_api");

        let (status, body) = get_json("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
