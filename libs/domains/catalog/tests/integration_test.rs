//! Integration tests against a real MongoDB (testcontainers)
//!
//! Run with `cargo test -p domain_catalog -- --ignored` on a host with Docker.

use domain_catalog::*;
use ::mongodb::bson::{doc, oid::ObjectId, Document};
use test_utils::{assertions, TestDataBuilder, TestMongo};

fn service(mongo: &TestMongo, test_name: &str) -> CatalogService<MongoDocumentStore> {
    let builder = TestDataBuilder::from_test_name(test_name);
    let store = MongoDocumentStore::new(mongo.database(&builder.database_name()));
    CatalogService::new(store)
}

fn new_product(title: &str, price: f64, category: &str) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: None,
        price,
        category: category.to_string(),
        in_stock: true,
        image: None,
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_then_get() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo, "create_then_get");

    let id = service
        .create_product(new_product("Tee", 10.0, "Tops"))
        .await
        .unwrap();
    assertions::assert_object_id(&id, "created id");

    let product = service
        .get_product(ObjectId::parse_str(&id).unwrap())
        .await
        .unwrap();

    assert_eq!(product.id, id);
    assert_eq!(product.title, "Tee");
    assert_eq!(product.price, 10.0);
    assert!(product.in_stock);
    assert_eq!(product.image, None);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_unknown_id_is_not_found() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo, "unknown_id");

    let result = service.get_product(ObjectId::new()).await;
    assert!(matches!(result, Err(CatalogError::NotFound(_))));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_category_filter_and_categories() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo, "category_filter");

    for (title, category) in [("Tee", "Tops"), ("Chinos", "Bottoms"), ("Joggers", "Bottoms")] {
        service
            .create_product(new_product(title, 20.0, category))
            .await
            .unwrap();
    }

    let bottoms = service
        .list_products(ProductQuery::by_category("Bottoms"))
        .await
        .unwrap();
    assert_eq!(bottoms.len(), 2);
    assert!(bottoms.iter().all(|p| p.category == "Bottoms"));

    let lowercase = service
        .list_products(ProductQuery::by_category("bottoms"))
        .await
        .unwrap();
    assert!(lowercase.is_empty());

    let all = service.list_products(ProductQuery::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    assert_eq!(service.list_categories().await, vec!["Bottoms", "Tops"]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_seed_twice() {
    let mongo = TestMongo::new().await;
    let service = service(&mongo, "seed_twice");

    let first = service.seed_demo_products().await.unwrap();
    assert_eq!(first, SeedReport::inserted(5));

    let second = service.seed_demo_products().await.unwrap();
    assert_eq!(second, SeedReport::already_seeded());

    let categories = service.list_categories().await;
    assert_eq!(categories, vec!["Bottoms", "Hoodies", "Outerwear", "Tops"]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_stored_documents_with_extra_fields_are_projected() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("extra_fields");
    let db = mongo.database(&builder.database_name());

    let inserted = db
        .collection::<Document>(PRODUCT_COLLECTION)
        .insert_one(doc! {
            "title": builder.name("product", "legacy"),
            "price": 12,
            "category": "Tops",
            "warehouse": "north",
        })
        .await
        .unwrap();

    let service = CatalogService::new(MongoDocumentStore::new(db));
    let products = service.list_products(ProductQuery::default()).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(
        products[0].id,
        inserted.inserted_id.as_object_id().unwrap().to_hex()
    );
    assert_eq!(products[0].price, 12.0);
    assert!(products[0].in_stock);

    let diagnostics = service.diagnostics().await;
    assert!(diagnostics.available);
    assert_eq!(diagnostics.collections.unwrap(), vec![PRODUCT_COLLECTION]);
}
