use mongodb::{Client, Database, bson::doc};

use crate::common::{DatabaseError, DatabaseResult};

/// Run `{ ping: 1 }` against `database`.
pub async fn ping(client: &Client, database: &str) -> DatabaseResult<()> {
    ping_database(&client.database(database)).await
}

/// Run `{ ping: 1 }` against an already selected database.
pub async fn ping_database(db: &Database) -> DatabaseResult<()> {
    db.run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_ping() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(ping(&client, "test").await.is_ok());
    }
}
