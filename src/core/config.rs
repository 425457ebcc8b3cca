use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::models::EcLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub style: StyleConfig,
    pub branding: BrandingConfig,
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_ec_level")]
    pub ec_level: EcLevel,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default = "default_quiet_zone")]
    pub quiet_zone: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_gradient_start")]
    pub gradient_start: String,
    #[serde(default = "default_gradient_end")]
    pub gradient_end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_false")]
    pub logo: bool,
    #[serde(default = "default_logo_path")]
    pub logo_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub qr_code: bool,
    #[serde(default = "default_false")]
    pub open_browser: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default = "default_true")]
    pub online: bool,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

// Default value functions
fn default_url() -> String { "https://artbeaurescence.sn".to_string() }
fn default_ec_level() -> EcLevel { EcLevel::Q }
fn default_size() -> u32 { 2000 }
fn default_quiet_zone() -> u32 { 4 }
fn default_foreground() -> String { "#000000".to_string() }
fn default_background() -> String { "#ffffff".to_string() }
fn default_gradient_start() -> String { "#1d2b64".to_string() }
fn default_gradient_end() -> String { "#f8cdda".to_string() }
fn default_logo_path() -> PathBuf { PathBuf::from("assets/logo.png") }
fn default_port() -> u16 { 8080 }
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_timeout() -> u64 { 5 }
fn default_true() -> bool { true }
fn default_false() -> bool { false }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig {
                url: default_url(),
                ec_level: default_ec_level(),
                size: default_size(),
                quiet_zone: default_quiet_zone(),
            },
            style: StyleConfig {
                foreground: default_foreground(),
                background: default_background(),
                gradient_start: default_gradient_start(),
                gradient_end: default_gradient_end(),
            },
            branding: BrandingConfig {
                logo: default_false(),
                logo_path: default_logo_path(),
            },
            server: ServerConfig {
                port: default_port(),
                host: default_host(),
            },
            ui: UiConfig {
                qr_code: default_true(),
                open_browser: default_false(),
            },
            check: CheckConfig {
                online: default_true(),
                timeout_secs: default_timeout(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("artqr.toml").required(false))
            .add_source(config::Environment::with_prefix("ARTQR"));

        // Override with individual environment variables
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }
        if let Ok(url) = std::env::var("QR_URL") {
            builder = builder.set_override("generator.url", url)?;
        }

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        Ok(config)
    }

    pub fn save_example() -> Result<()> {
        let example_config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&example_config)?;
        std::fs::write("artqr.example.toml", toml_string)?;
        Ok(())
    }

    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.generator.url, "https://artbeaurescence.sn");
        assert_eq!(config.generator.ec_level, EcLevel::Q);
        assert_eq!(config.generator.size, 2000);
        assert_eq!(config.generator.quiet_zone, 4);
        assert_eq!(config.style.foreground, "#000000");
        assert_eq!(config.style.background, "#ffffff");
        assert!(!config.branding.logo);
        assert_eq!(config.branding.logo_path, PathBuf::from("assets/logo.png"));
        assert_eq!(config.server.port, 8080);
        assert!(config.ui.qr_code);
        assert!(!config.ui.open_browser);
        assert!(config.check.online);
        assert_eq!(config.check.timeout_secs, 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        assert!(toml_string.contains("[generator]"));
        assert!(toml_string.contains("url = \"https://artbeaurescence.sn\""));
        assert!(toml_string.contains("[style]"));
        assert!(toml_string.contains("[server]"));
        assert!(toml_string.contains("port = 8080"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_content = r##"
            [generator]
            url = "https://example.com"
            ec_level = "H"
            size = 640
            quiet_zone = 2

            [style]
            foreground = "#112233"
            background = "#ffffff"
            gradient_start = "#000000"
            gradient_end = "#ff00ff"

            [branding]
            logo = true
            logo_path = "branding/logo.png"

            [server]
            port = 9090
            host = "127.0.0.1"

            [ui]
            qr_code = false
            open_browser = true

            [check]
            online = false
            timeout_secs = 2
        "##;

        let config = AppConfig::from_toml(toml_content).unwrap();

        assert_eq!(config.generator.url, "https://example.com");
        assert_eq!(config.generator.ec_level, EcLevel::H);
        assert_eq!(config.generator.size, 640);
        assert_eq!(config.generator.quiet_zone, 2);
        assert_eq!(config.style.foreground, "#112233");
        assert!(config.branding.logo);
        assert_eq!(config.branding.logo_path, PathBuf::from("branding/logo.png"));
        assert_eq!(config.server.port, 9090);
        assert!(!config.ui.qr_code);
        assert!(config.ui.open_browser);
        assert!(!config.check.online);
        assert_eq!(config.check.timeout_secs, 2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_content = r#"
            [generator]
            url = "https://example.com"

            [style]

            [branding]

            [server]
            port = 3000

            [ui]

            [check]
        "#;

        let config = AppConfig::from_toml(toml_content).unwrap();

        assert_eq!(config.generator.url, "https://example.com");
        assert_eq!(config.generator.ec_level, EcLevel::Q); // Default value
        assert_eq!(config.generator.size, 2000); // Default value
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0"); // Default value
        assert!(config.check.online); // Default value
    }

    #[test]
    fn test_save_example_config() {
        let temp_dir = TempDir::new().unwrap();
        let original_dir = env::current_dir().unwrap();

        env::set_current_dir(&temp_dir).unwrap();

        AppConfig::save_example().unwrap();

        let content = std::fs::read_to_string("artqr.example.toml").unwrap();
        assert!(content.contains("[generator]"));
        assert!(content.contains("ec_level = \"Q\""));

        env::set_current_dir(original_dir).unwrap();
    }

    #[test]
    fn test_invalid_toml() {
        let invalid_toml = "invalid toml content [[[";
        let result = AppConfig::from_toml(invalid_toml);
        assert!(result.is_err());
    }
}
