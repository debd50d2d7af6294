use crate::config::WelcomeConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{CivicData, MessageFile, MongoDb};
use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: WelcomeConfig,
    pub db: MongoDb,
    pub civic: CivicData,
    pub message: MessageFile,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: WelcomeConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let civic = CivicData::new(db.clone(), &config.mongodb, &config.parking);
        let message = MessageFile::new(&config.message.path);

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
            civic,
            message,
        };

        // The map frontend is served from a different origin.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/welcome", get(handlers::get_welcome_message))
            .route("/welcome/bulletins", get(handlers::list_bulletins))
            .route("/welcome/locations", get(handlers::list_locations))
            .route("/welcome/parkingspaces", get(handlers::list_parking_spaces))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
