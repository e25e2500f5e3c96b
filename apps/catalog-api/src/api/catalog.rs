//! Catalog API routes

use axum::Router;
use domain_catalog::handlers;

use crate::state::AppState;

/// Products, categories and seeding, sharing the state's catalog service
pub fn router(state: &AppState) -> Router {
    handlers::router_with_shared(state.catalog.clone())
}
