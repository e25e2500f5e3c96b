//! Application state management

use std::sync::Arc;

use domain_catalog::{CatalogService, MongoDocumentStore};
use mongodb::{Client, Database};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` in "database not available" mode
    pub mongo_client: Option<Client>,
    pub db: Option<Database>,
    pub catalog: Arc<CatalogService<MongoDocumentStore>>,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Option<Client>) -> Self {
        let db = match (&mongo_client, &config.mongodb) {
            (Some(client), Some(mongo)) => Some(client.database(mongo.database())),
            _ => None,
        };

        let store = match &db {
            Some(db) => MongoDocumentStore::new(db.clone()),
            None => MongoDocumentStore::unavailable(),
        };

        Self {
            config,
            mongo_client,
            db,
            catalog: Arc::new(CatalogService::new(store)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::{client_from_config, MongoConfig};

    fn config(mongodb: Option<MongoConfig>) -> Config {
        Config {
            app: app_info!(),
            mongodb,
            server: ServerConfig::default(),
            environment: Environment::Development,
        }
    }

    #[test]
    fn test_store_unavailable_without_configuration() {
        let state = AppState::new(config(None), None);
        assert!(state.db.is_none());
        assert!(!state.catalog.is_store_available());
    }

    #[tokio::test]
    async fn test_configured_store_is_available_before_first_contact() {
        let mongo = MongoConfig::with_database("mongodb://127.0.0.1:1", "catalog");
        let client = client_from_config(&mongo).await.unwrap();

        let state = AppState::new(config(Some(mongo)), Some(client));

        assert_eq!(state.db.as_ref().map(|db| db.name()), Some("catalog"));
        assert!(state.catalog.is_store_available());
    }
}
