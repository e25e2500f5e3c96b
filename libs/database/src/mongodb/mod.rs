//! MongoDB connector and utilities

mod config;
mod connector;
mod health;

pub use config::{DATABASE_VARS, MongoConfig, URL_VARS};
pub use connector::{client_from_config, connect_from_config, connect_from_config_with_retry};
pub use health::{ping, ping_database};

pub use mongodb::{Client, Database};
