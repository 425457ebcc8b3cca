use anyhow::{bail, Result};
use clap::Parser;
use humansize::{format_size, BINARY};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::core::app::App;
use crate::core::config::AppConfig;
use crate::core::error::AppError;
use crate::core::models::{EcLevel, Fill, QrRequest};
use crate::export::{pdf, raster, svg};
use crate::render;
use crate::utils::color::parse_hex;
use crate::utils::network::{check_reachability, get_available_port_or_default};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL to encode
    #[arg(long)]
    url: Option<String>,

    /// PNG output path
    #[arg(long, default_value = "qrcode_artbeaurescence.png")]
    png: PathBuf,

    /// Skip the PNG output
    #[arg(long)]
    no_png: bool,

    /// SVG output path (vector, rendered straight from the module matrix)
    #[arg(long)]
    svg: Option<PathBuf>,

    /// JPEG output path
    #[arg(long)]
    jpeg: Option<PathBuf>,

    /// PDF output path (A4 page, 160mm print width)
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Error-correction level
    #[arg(long, value_enum)]
    ec_level: Option<EcLevel>,

    /// Output side length in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Quiet zone width in modules
    #[arg(long)]
    quiet_zone: Option<u32>,

    /// Foreground color (#rrggbb)
    #[arg(long)]
    fg: Option<String>,

    /// Background color (#rrggbb); fills JPEG/PDF flattening and SVG light modules
    #[arg(long)]
    bg: Option<String>,

    /// Gradient start color (#rrggbb); with --gradient-end switches to the branded fill
    #[arg(long, requires = "gradient_end")]
    gradient_start: Option<String>,

    /// Gradient end color (#rrggbb)
    #[arg(long, requires = "gradient_start")]
    gradient_end: Option<String>,

    /// Overlay the configured logo
    #[arg(long)]
    logo: bool,

    /// Skip the online reachability probe
    #[arg(long)]
    no_check: bool,

    /// Reachability probe timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Start the browser studio instead of writing files
    #[arg(long)]
    serve: bool,

    /// Studio port (next available port is used if this one is busy)
    #[arg(short, long)]
    port: Option<u16>,

    /// Open the studio in the default browser
    #[arg(short, long)]
    open: bool,

    /// Generate example configuration file
    #[arg(long)]
    generate_config: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        // Generate config file if requested
        if self.generate_config {
            AppConfig::save_example()?;
            println!("Generated example configuration file: artqr.example.toml");
            return Ok(());
        }

        // Load configuration
        let mut config = AppConfig::load().unwrap_or_else(|e| {
            info!("Using default configuration ({})", e);
            AppConfig::default()
        });

        // Override config with CLI arguments
        if let Some(ref url) = self.url {
            config.generator.url = url.clone();
        }
        if let Some(ec_level) = self.ec_level {
            config.generator.ec_level = ec_level;
        }
        if let Some(size) = self.size {
            config.generator.size = size;
        }
        if let Some(quiet_zone) = self.quiet_zone {
            config.generator.quiet_zone = quiet_zone;
        }
        if let Some(ref fg) = self.fg {
            config.style.foreground = fg.clone();
        }
        if let Some(ref bg) = self.bg {
            config.style.background = bg.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(timeout) = self.timeout {
            config.check.timeout_secs = timeout;
        }
        if self.no_check {
            config.check.online = false;
        }
        if self.logo {
            config.branding.logo = true;
        }
        if self.open {
            config.ui.open_browser = true;
        }

        validate_url(&config.generator.url)?;

        if self.serve {
            config.server.port = get_available_port_or_default(config.server.port);
            let app = App::new(config);
            return app.run().await;
        }

        if config.check.online {
            let timeout = Duration::from_secs(config.check.timeout_secs);
            let reachable = check_reachability(&config.generator.url, timeout).await;
            let status = if reachable { "OK" } else { "UNREACHABLE" };
            println!("[Info] Online check for {}: {}", config.generator.url, status);
            // The QR encodes the URL either way
        }

        self.generate(&config)
    }

    fn generate(&self, config: &AppConfig) -> Result<()> {
        if self.no_png && self.svg.is_none() && self.jpeg.is_none() && self.pdf.is_none() {
            bail!("No output requested (PNG disabled and no --svg/--jpeg/--pdf path given)");
        }

        let fill = match (&self.gradient_start, &self.gradient_end) {
            (Some(start), Some(end)) => Fill::Gradient {
                top: parse_hex(start)?,
                bottom: parse_hex(end)?,
            },
            _ => Fill::Solid(parse_hex(&config.style.foreground)?),
        };

        let request = QrRequest::new(
            config.generator.url.clone(),
            config.generator.ec_level,
            config.generator.size,
            config.generator.quiet_zone,
        )
        .with_fill(fill)
        .with_logo(config.branding.logo.then(|| config.branding.logo_path.clone()));

        let needs_raster = !self.no_png || self.jpeg.is_some() || self.pdf.is_some();
        if needs_raster {
            let background = parse_hex(&config.style.background)?;
            let image = render::render(&request)?;

            if !self.no_png {
                let written = raster::write_png(&image, &self.png)?;
                println!("[OK] PNG written: {} ({})", self.png.display(), format_size(written, BINARY));
            }
            if let Some(ref path) = self.jpeg {
                let written = raster::write_jpeg(&image, background, path)?;
                println!("[OK] JPEG written: {} ({})", path.display(), format_size(written, BINARY));
            }
            if let Some(ref path) = self.pdf {
                let written = pdf::write_pdf(&image, background, path)?;
                println!("[OK] PDF written: {} ({})", path.display(), format_size(written, BINARY));
            }
        }

        if let Some(ref path) = self.svg {
            let written = svg::write_svg(
                &request.url,
                request.ec_level,
                request.size,
                request.quiet_zone,
                &config.style.foreground,
                &config.style.background,
                path,
            )?;
            println!("[OK] SVG written: {} ({})", path.display(), format_size(written, BINARY));
        }

        Ok(())
    }
}

/// The QR is only useful for http(s) URLs with a host.
fn validate_url(input: &str) -> Result<(), AppError> {
    let parsed =
        Url::parse(input).map_err(|e| AppError::InvalidUrl(format!("{input}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(AppError::InvalidUrl(format!(
            "{input} (expected an http/https URL with a host)"
        )));
    }
    Ok(())
}
