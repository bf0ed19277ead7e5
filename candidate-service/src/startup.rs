use crate::config::CandidateConfig;
use crate::handlers;
use crate::services::MongoDb;
use axum::{
    http::{header, Method},
    routing::{any, get},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: CandidateConfig,
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Binds the listener and builds the router. Does NOT touch the
    /// database: the connection is established lazily by the first request
    /// that needs it.
    pub async fn build(config: CandidateConfig) -> Result<Self, AppError> {
        let db = MongoDb::new(config.mongodb.clone());
        let state = AppState {
            config: config.clone(),
            db,
        };

        let app = router(state.clone());

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

fn router(state: AppState) -> Router {
    // Permissive CORS, mirrored on every response; the layer also answers
    // preflight requests before they reach the routes.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/candidates",
            get(handlers::legacy::list_candidates)
                .post(handlers::legacy::replace_candidates)
                .options(handlers::preflight)
                .fallback(handlers::legacy::method_not_allowed),
        )
        .route(
            "/api/v2/candidates",
            get(handlers::candidates::list_candidates)
                .post(handlers::candidates::create_candidate)
                .put(handlers::candidates::update_candidate)
                .delete(handlers::candidates::delete_candidate)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/history",
            get(handlers::history::list_history)
                .post(handlers::history::append_history)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route("/api/test", any(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
