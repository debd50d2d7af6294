use crate::error::AppError;
use mongodb::{
    bson::{doc, Document},
    Client as MongoClient, Collection, Database,
};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);

        // The driver connects lazily; ping here so an unreachable store is
        // fatal at startup rather than on the first request.
        db.run_command(doc! { "ping": 1 }, None).await.map_err(|e| {
            tracing::error!("MongoDB ping failed: {}", e);
            AppError::from(e)
        })?;

        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn bulletins(&self) -> Collection<Document> {
        self.db.collection("bulletins")
    }

    pub fn locations(&self) -> Collection<Document> {
        self.db.collection("locations")
    }

    pub fn parking_spaces(&self) -> Collection<Document> {
        self.db.collection("parklocations")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
