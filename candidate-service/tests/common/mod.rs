use candidate_service::config::CandidateConfig;
use candidate_service::services::MongoDb;
use candidate_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
    pub legacy_db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("candidate_test_{}", Uuid::new_v4());
        let legacy_db_name = format!("legacy_test_{}", Uuid::new_v4());

        let mut config = CandidateConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();
        config.mongodb.legacy_database = legacy_db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/test", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
            legacy_db_name,
        }
    }

    /// Drops both test databases.
    pub async fn cleanup(&self) {
        if let Ok(client) = self.db.client().await {
            let _ = client.database(&self.db_name).drop(None).await;
            let _ = client.database(&self.legacy_db_name).drop(None).await;
        }
    }
}
