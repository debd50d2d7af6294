use uuid::Uuid;
use welcome_service::config::WelcomeConfig;
use welcome_service::services::MongoDb;
use welcome_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
    pub welcome_path: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn with a config tweak applied before the app is built.
    pub async fn spawn_with(configure: impl FnOnce(&mut WelcomeConfig)) -> Self {
        if std::env::var("MONGODB_URI").is_err() {
            std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        }

        let db_name = format!("welcome_test_{}", Uuid::new_v4().simple());
        let welcome_path = format!("target/welcome-{}.txt", Uuid::new_v4());

        let mut config = WelcomeConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();
        config.message.path = welcome_path.clone();
        configure(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
            welcome_path,
        }
    }

    pub async fn write_welcome(&self, contents: &str) {
        tokio::fs::write(&self.welcome_path, contents)
            .await
            .expect("Failed to write welcome file");
    }

    /// Cleanup test resources (database and welcome file).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
        let _ = tokio::fs::remove_file(&self.welcome_path).await;
    }
}
