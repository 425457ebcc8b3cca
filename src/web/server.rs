use anyhow::Result;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::models::ServerInfo;
use crate::web::routes::create_routes;

pub struct WebServer {
    addr: SocketAddr,
    config: AppConfig,
    server_info: ServerInfo,
}

impl WebServer {
    pub fn new(addr: SocketAddr, config: AppConfig, server_info: ServerInfo) -> Self {
        Self {
            addr,
            config,
            server_info,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let app = create_routes(self.config.clone(), self.server_info.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors);

        info!("Starting QR studio on {}", self.addr);
        let listener = TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
