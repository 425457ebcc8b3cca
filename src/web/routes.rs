use axum::{routing::get, Router};

use crate::core::config::AppConfig;
use crate::core::models::ServerInfo;
use crate::web::handlers::{
    api::{api_not_found, download_qr, get_server_info, health_check, preview_qr},
    static_files::serve_index,
};

pub fn create_routes(config: AppConfig, server_info: ServerInfo) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/server", get(get_server_info))
        .route("/qr/preview", get(preview_qr))
        .route("/qr/download/:format", get(download_qr))
        .fallback(api_not_found)
        .with_state((config, server_info));

    // The studio page is embedded; everything else falls through to it
    Router::new().nest("/api", api_routes).fallback(serve_index)
}
