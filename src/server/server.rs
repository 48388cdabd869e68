use std::sync::Arc;
use std::error::Error;
use tokio::net::TcpListener;
use axum::{Router, routing::get};
use tracing::info;

use crate::simulator::DemoSimulator;
use super::routes;

/// API Server answering the web client's backend calls with demo data
pub struct ApiServer {
    simulator: Arc<DemoSimulator>,
    host: String,
    port: u16,
}

impl ApiServer {
    pub fn new(simulator: DemoSimulator, host: String, port: u16) -> Self {
        info!(
            "Creating new API server on {}:{} (latency {:?})",
            host, port, simulator.latency()
        );
        Self {
            simulator: Arc::new(simulator),
            host,
            port,
        }
    }

    /// Builds the router. Everything except `GET /health` falls through
    /// to the simulator, including other methods on `/health`.
    pub fn router(&self) -> Router {
        let app_state = Arc::clone(&self.simulator);

        Router::new()
            .route("/health", get(routes::health_check).fallback(routes::simulate))
            .fallback(routes::simulate)
            .with_state(app_state)
    }

    pub async fn start(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = self.router();

        info!("Starting server on {}:{}", self.host, self.port);
        let listener = TcpListener::bind((self.host.as_str(), self.port)).await?;

        info!("Server started successfully");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
