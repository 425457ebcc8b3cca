use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::error::AppError;
use crate::core::models::{Fill, QrRequest, ServerInfo};
use crate::export::{pdf, raster};
use crate::render;
use crate::utils::color::parse_hex;

/// Base name for every browser download.
pub const DOWNLOAD_BASENAME: &str = "qrcode_artbeaurescence";

/// Previews render small; downloads use the configured export size.
const PREVIEW_SIZE: u32 = 640;

/// Styling options posted by the studio form. Anything omitted falls back to
/// the loaded configuration.
#[derive(Debug, Default, Deserialize)]
pub struct StyleParams {
    url: Option<String>,
    start: Option<String>,
    end: Option<String>,
    quiet_zone: Option<u32>,
    logo: Option<bool>,
    size: Option<u32>,
}

impl StyleParams {
    fn into_request(self, config: &AppConfig, default_size: u32) -> Result<QrRequest, AppError> {
        let top = parse_hex(self.start.as_deref().unwrap_or(&config.style.gradient_start))?;
        let bottom = parse_hex(self.end.as_deref().unwrap_or(&config.style.gradient_end))?;
        let logo = self.logo.unwrap_or(config.branding.logo);

        Ok(QrRequest {
            url: self.url.unwrap_or_else(|| config.generator.url.clone()),
            ec_level: config.generator.ec_level,
            size: self.size.unwrap_or(default_size),
            quiet_zone: self.quiet_zone.unwrap_or(config.generator.quiet_zone),
            fill: Fill::Gradient { top, bottom },
            logo: logo.then(|| config.branding.logo_path.clone()),
        })
    }
}

fn error_status(err: &AppError) -> StatusCode {
    match err {
        AppError::CapacityExceeded(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::InvalidColor(_) | AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_and_map(err: AppError) -> StatusCode {
    error!("QR generation failed: {}", err);
    error_status(&err)
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "artqr"
    }))
}

pub async fn get_server_info(
    State((_, server_info)): State<(AppConfig, ServerInfo)>,
) -> Json<ServerInfo> {
    Json(server_info)
}

pub async fn preview_qr(
    State((config, _)): State<(AppConfig, ServerInfo)>,
    Query(params): Query<StyleParams>,
) -> Result<impl IntoResponse, StatusCode> {
    let request = params.into_request(&config, PREVIEW_SIZE).map_err(log_and_map)?;
    let image = render::render(&request).map_err(log_and_map)?;
    let bytes = raster::png_bytes(&image).map_err(log_and_map)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("image/png"));
    Ok((headers, bytes))
}

pub async fn download_qr(
    State((config, _)): State<(AppConfig, ServerInfo)>,
    Path(format): Path<String>,
    Query(params): Query<StyleParams>,
) -> Result<impl IntoResponse, StatusCode> {
    let request = params
        .into_request(&config, config.generator.size)
        .map_err(log_and_map)?;
    let image = render::render(&request).map_err(log_and_map)?;
    let background = parse_hex(&config.style.background).map_err(log_and_map)?;

    let (bytes, content_type, extension) = match format.as_str() {
        "png" => (raster::png_bytes(&image).map_err(log_and_map)?, "image/png", "png"),
        "jpg" | "jpeg" => (
            raster::jpeg_bytes(&image, background).map_err(log_and_map)?,
            "image/jpeg",
            "jpg",
        ),
        "pdf" => (
            pdf::pdf_bytes(&image, background).map_err(log_and_map)?,
            "application/pdf",
            "pdf",
        ),
        _ => {
            error!("Unknown download format: {}", format);
            return Err(StatusCode::NOT_FOUND);
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}.{}\"", DOWNLOAD_BASENAME, extension)
            .parse()
            .unwrap(),
    );

    info!("Serving {} download ({} bytes)", extension, bytes.len());
    Ok((headers, bytes))
}

/// Handle 404 errors for API routes
pub async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "API endpoint not found"
        })),
    )
}
