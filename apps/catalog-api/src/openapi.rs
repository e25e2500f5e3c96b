//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::root::{self, DiagnosticsResponse, MessageResponse};

/// Combined OpenAPI documentation for Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clothing Store API",
        version = "1.0.0",
        description = "Product catalog for a clothing storefront, backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(root::read_root, root::hello, root::diagnostics),
    components(schemas(MessageResponse, DiagnosticsResponse)),
    nest(
        (path = "/api", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Service", description = "Liveness and diagnostics")
    )
)]
pub struct ApiDoc;
