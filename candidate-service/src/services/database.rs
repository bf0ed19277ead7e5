use crate::config::MongoConfig;
use crate::models::{Candidate, HistoryEntry};
use anyhow::anyhow;
use mongodb::bson::Document;
use mongodb::{Client as MongoClient, Collection};
use service_core::error::AppError;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Lazily connected MongoDB handle shared by every request in the process.
///
/// The client is established on the first call that needs it and cached for
/// the process lifetime; it is never explicitly closed. Concurrent first
/// callers await a single in-flight establishment attempt, and a failed
/// attempt leaves the cell empty so a later request can retry.
#[derive(Clone)]
pub struct MongoDb {
    config: MongoConfig,
    client: Arc<OnceCell<MongoClient>>,
}

impl MongoDb {
    pub fn new(config: MongoConfig) -> Self {
        Self {
            config,
            client: Arc::new(OnceCell::new()),
        }
    }

    /// Whether a connection string is configured. Does not attempt to
    /// connect; the health check reports this without touching the database.
    pub fn is_configured(&self) -> bool {
        self.config.uri.is_some()
    }

    /// Returns the cached client, establishing the connection on first use.
    pub async fn client(&self) -> Result<&MongoClient, AppError> {
        self.client
            .get_or_try_init(|| async {
                let uri = self.config.uri.as_deref().ok_or_else(|| {
                    AppError::ConfigError(anyhow!(
                        "MONGODB_URI environment variable is not set"
                    ))
                })?;

                let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
                    tracing::error!("Database connection error: {}", e);
                    AppError::ConnectionError(anyhow::Error::new(e))
                })?;

                tracing::info!("Connected to MongoDB");
                Ok(client)
            })
            .await
    }

    /// Resolves a named collection in a named database. Pure lookup: nothing
    /// beyond the client itself is cached.
    pub async fn collection<T>(
        &self,
        database: &str,
        name: &str,
    ) -> Result<Collection<T>, AppError> {
        Ok(self.client().await?.database(database).collection(name))
    }

    pub async fn candidates(&self) -> Result<Collection<Candidate>, AppError> {
        self.collection(&self.config.database, "candidates").await
    }

    /// The legacy bulk route predates the typed candidate model and its
    /// documents carry no server-assigned timestamps, so it stays untyped.
    pub async fn legacy_candidates(&self) -> Result<Collection<Document>, AppError> {
        self.collection(&self.config.legacy_database, "candidates")
            .await
    }

    pub async fn history(&self) -> Result<Collection<HistoryEntry>, AppError> {
        self.collection(&self.config.database, "history").await
    }
}
