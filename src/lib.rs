//! artqr - Branded QR code generator for a fixed URL
//!
//! This crate renders QR codes pointing at <https://artbeaurescence.sn> in two
//! forms: a one-shot CLI that writes PNG/JPEG/SVG/PDF files to disk, and a
//! local web studio with a live preview and deterministic downloads.

pub mod cli;
pub mod core;
pub mod export;
pub mod render;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{EcLevel, Fill, QrRequest, ServerInfo},
};

pub use crate::utils::{color::parse_hex, network::is_port_available};

pub use crate::web::{routes::create_routes, server::WebServer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
