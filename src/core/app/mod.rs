use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::ServerInfo;
use crate::utils::terminal::studio_qr;
use crate::web::server::WebServer;

pub struct App {
    config: AppConfig,
    server_info: ServerInfo,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let server_info = ServerInfo::new(config.server.port);
        Self { config, server_info }
    }

    pub async fn run(&self) -> Result<()> {
        info!("QR studio available at: {}", self.server_info.url());

        // Show a scannable link in the terminal
        if self.config.ui.qr_code {
            match studio_qr(&self.server_info.url()) {
                Ok(qr) => println!("{}", qr),
                Err(e) => error!("Failed to render terminal QR code: {}", e),
            }
        }

        if self.config.ui.open_browser {
            if let Err(e) = open::that(self.server_info.url()) {
                error!("Failed to open browser: {}", e);
            }
        }

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.port));
        let server = WebServer::new(addr, self.config.clone(), self.server_info.clone());

        // Setup graceful shutdown
        let shutdown_signal = async {
            signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
            info!("Received Ctrl+C, shutting down gracefully...");
        };

        tokio::select! {
            result = server.run() => {
                if let Err(e) = result {
                    error!("Server error: {}", e);
                }
            }
            _ = shutdown_signal => {
                info!("Shutdown signal received");
            }
        }

        info!("Shutdown complete");
        Ok(())
    }
}
