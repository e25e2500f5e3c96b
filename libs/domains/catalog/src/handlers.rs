//! HTTP handlers for the Catalog API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestObjectIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ObjectIdPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CreatedProduct, NewProduct, Product, ProductQuery, SeedReport};
use crate::repository::DocumentStore;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        list_categories,
        seed_products,
    ),
    components(
        schemas(Product, NewProduct, CreatedProduct, SeedReport),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestObjectIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Dev", description = "Demo data helpers")
    )
)]
pub struct ApiDoc;

/// Catalog routes, meant to be nested under `/api`
pub fn router<S: DocumentStore + 'static>(service: CatalogService<S>) -> Router {
    router_with_shared(Arc::new(service))
}

/// Same as [`router`], for a service that is also used elsewhere
pub fn router_with_shared<S: DocumentStore + 'static>(service: Arc<CatalogService<S>>) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product))
        .route("/categories", get(list_categories))
        .route("/seed", post(seed_products))
        .with_state(service)
}

/// List products, optionally by category
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    Query(query): Query<ProductQuery>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.list_products(query).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = CreatedProduct),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, description = "Body is not a product payload"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    ValidatedJson(input): ValidatedJson<NewProduct>,
) -> CatalogResult<impl IntoResponse> {
    let id = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(CreatedProduct { id })))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestObjectIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Distinct product categories, sorted
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Products",
    responses(
        (status = 200, description = "Sorted category names", body = Vec<String>)
    )
)]
async fn list_categories<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Json<Vec<String>> {
    Json(service.list_categories().await)
}

/// Seed the demo catalog into an empty collection
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Dev",
    responses(
        (status = 200, description = "Seed outcome", body = SeedReport),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seed_products<S: DocumentStore>(
    State(service): State<Arc<CatalogService<S>>>,
) -> CatalogResult<Json<SeedReport>> {
    let report = service.seed_demo_products().await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::repository::MockDocumentStore;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use mongodb::bson::{doc, oid::ObjectId, Bson};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(store: MockDocumentStore) -> Router {
        router(CatalogService::new(store))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_product_returns_201_with_id() {
        let mut store = MockDocumentStore::new();
        let id = ObjectId::new();
        store.expect_insert().returning(move |_, _| Ok(id));

        let response = app(store)
            .oneshot(post_json(
                "/products",
                json!({"title": "Tee", "price": 10, "category": "Tops"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_body(response).await, json!({"id": id.to_hex()}));
    }

    #[tokio::test]
    async fn test_create_product_rule_violation_is_400() {
        let mut store = MockDocumentStore::new();
        store.expect_insert().never();

        let response = app(store)
            .oneshot(post_json(
                "/products",
                json!({"title": "", "price": -1, "category": "Tops"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]["title"].is_array());
        assert!(body["details"]["price"].is_array());
    }

    #[tokio::test]
    async fn test_create_product_missing_field_is_422() {
        let mut store = MockDocumentStore::new();
        store.expect_insert().never();

        let response = app(store)
            .oneshot(post_json("/products", json!({"title": "Tee"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_product_without_store_is_500() {
        let mut store = MockDocumentStore::new();
        store
            .expect_insert()
            .returning(|_, _| Err(CatalogError::StoreUnavailable));

        let response = app(store)
            .oneshot(post_json(
                "/products",
                json!({"title": "Tee", "price": 10, "category": "Tops"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["message"], "Database not available");
    }

    #[tokio::test]
    async fn test_get_product_returns_external_shape() {
        let mut store = MockDocumentStore::new();
        let id = ObjectId::new();
        store.expect_find_one().returning(move |_, _| {
            Ok(Some(doc! {
                "_id": id,
                "title": "Tee",
                "description": Bson::Null,
                "price": 10.0,
                "category": "Tops",
                "in_stock": true,
                "image": Bson::Null,
                "internal_note": "hidden",
            }))
        });

        let response = app(store)
            .oneshot(get(&format!("/products/{}", id.to_hex())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "id": id.to_hex(),
                "title": "Tee",
                "description": null,
                "price": 10.0,
                "category": "Tops",
                "in_stock": true,
                "image": null
            })
        );
    }

    #[tokio::test]
    async fn test_get_unknown_product_is_404() {
        let mut store = MockDocumentStore::new();
        store.expect_find_one().returning(|_, _| Ok(None));

        let response = app(store)
            .oneshot(get("/products/65a1b2c3d4e5f6a7b8c9d0e1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["message"], "Product not found");
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_400() {
        let mut store = MockDocumentStore::new();
        store.expect_find_one().never();

        let response = app(store).oneshot(get("/products/not-an-id")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "INVALID_OBJECT_ID");
    }

    #[tokio::test]
    async fn test_list_products_passes_category() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find()
            .withf(|_, filter| filter.get_str("category").ok() == Some("Bottoms"))
            .returning(|_, _| Ok(Vec::new()));

        let response = app(store)
            .oneshot(get("/products?category=Bottoms"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_categories_empty_when_unavailable() {
        let mut store = MockDocumentStore::new();
        store
            .expect_distinct()
            .returning(|_, _| Err(CatalogError::StoreUnavailable));

        let response = app(store).oneshot(get("/categories")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_seed_reports_existing_products() {
        let mut store = MockDocumentStore::new();
        store.expect_count().returning(|_, _| Ok(3));

        let response = app(store)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/seed")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"inserted": 0, "message": "Products already exist"})
        );
    }
}
