use clap::ValueEnum;
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// QR error-correction level, trading redundancy against data capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum EcLevel {
    L,
    M,
    Q,
    H,
}

impl EcLevel {
    pub fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            EcLevel::L => qrcode::EcLevel::L,
            EcLevel::M => qrcode::EcLevel::M,
            EcLevel::Q => qrcode::EcLevel::Q,
            EcLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl std::str::FromStr for EcLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(EcLevel::L),
            "M" => Ok(EcLevel::M),
            "Q" => Ok(EcLevel::Q),
            "H" => Ok(EcLevel::H),
            other => Err(format!("invalid error-correction level: {other} (expected L, M, Q or H)")),
        }
    }
}

impl std::fmt::Display for EcLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        write!(f, "{s}")
    }
}

/// Fill painted behind the opaque mask pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Flat foreground color (CLI default).
    Solid(Rgba<u8>),
    /// Linear top-to-bottom gradient (branded form).
    Gradient { top: Rgba<u8>, bottom: Rgba<u8> },
}

/// One immutable QR generation request. Built once per call, discarded after
/// the resulting image is written or downloaded.
#[derive(Debug, Clone)]
pub struct QrRequest {
    pub url: String,
    pub ec_level: EcLevel,
    /// Output side length in pixels.
    pub size: u32,
    /// Quiet zone width in modules.
    pub quiet_zone: u32,
    pub fill: Fill,
    /// Logo file to overlay; a failed load degrades to no overlay.
    pub logo: Option<PathBuf>,
}

impl QrRequest {
    pub fn new(url: impl Into<String>, ec_level: EcLevel, size: u32, quiet_zone: u32) -> Self {
        Self {
            url: url.into(),
            ec_level,
            size,
            quiet_zone,
            fill: Fill::Solid(Rgba([0, 0, 0, 255])),
            logo: None,
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_logo(mut self, logo: Option<PathBuf>) -> Self {
        self.logo = logo;
        self
    }
}

/// Identity of the running studio server, shown on the page footer and
/// encoded into the terminal QR code.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerInfo {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub port: u16,
    pub os: String,
}

impl ServerInfo {
    pub fn new(port: u16) -> Self {
        let hostname = hostname::get()
            .unwrap_or_else(|_| "unknown".into())
            .to_string_lossy()
            .to_string();

        let ip = local_ip_address::local_ip()
            .map(|ip| ip.to_string())
            .unwrap_or_else(|_| "127.0.0.1".to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            name: hostname,
            ip,
            port,
            os: std::env::consts::OS.to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }
}
