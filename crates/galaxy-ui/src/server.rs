//! Web UI server implementation

use crate::handlers;
use crate::{AppState, TransContext};
use axum::{Router, routing::get};
use galaxy_core::AppConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// UI server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Host to bind to (default: 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// UI Server
pub struct UiServer {
    config: UiConfig,
    state: AppState,
}

impl UiServer {
    pub fn new(config: UiConfig, app_config: AppConfig, trans: TransContext) -> Self {
        Self {
            config,
            state: AppState {
                app_config: Arc::new(app_config),
                trans: Arc::new(trans),
            },
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::pages::index))
            .route("/masthead", get(handlers::pages::masthead))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the UI server
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

        let router = self.build_router();

        info!("Galaxy UI server starting on http://{}", addr);
        info!("   Page:      http://{}/", addr);
        info!("   Masthead:  http://{}/masthead", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
