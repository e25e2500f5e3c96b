//! Catalog API - REST server for the clothing store catalog

use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::{client_from_config, connect_from_config_with_retry, MongoConfig};
use mongodb::Client;
use std::time::Duration;
use tracing::{error, info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Connect when configured; without configuration run without a database.
///
/// An unreachable deployment keeps a lazily connecting client, so requests
/// fail with store errors until MongoDB comes back.
async fn connect(mongo: Option<&MongoConfig>) -> Option<Client> {
    let Some(mongo) = mongo else {
        warn!("DATABASE_URL or DATABASE_NAME not set; running without a database");
        return None;
    };

    match connect_from_config_with_retry(mongo, None).await {
        Ok(client) => {
            info!(database = mongo.database(), "Connected to MongoDB");
            Some(client)
        }
        Err(e) => {
            warn!(error = %e, "MongoDB unreachable at startup; will keep retrying on demand");
            match client_from_config(mongo).await {
                Ok(client) => Some(client),
                Err(e) => {
                    error!(error = %e, "Invalid MongoDB settings; running without a database");
                    None
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let mongo_client = connect(config.mongodb.as_ref()).await;
    let state = AppState::new(config, mongo_client);

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), api::root_routes(&state))?;

    info!(
        "Starting Catalog API on port {} (database {})",
        state.config.server.port,
        if state.db.is_some() { "configured" } else { "not available" }
    );

    let server = state.config.server.clone();
    create_production_app(router, &server, Duration::from_secs(30), async move {
        if let Some(client) = state.mongo_client {
            info!("Shutting down: closing MongoDB connections");
            drop(client);
            info!("MongoDB connection closed");
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
