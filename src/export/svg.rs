use qrcode::render::svg;
use qrcode::QrCode;
use std::fs;
use std::path::Path;

use crate::core::error::AppResult;
use crate::core::models::EcLevel;

/// Emit an SVG document straight from the module matrix, bypassing raster
/// compositing. The encoder's standard 4-module quiet zone is used whenever
/// `quiet_zone` is non-zero; the raster path honors arbitrary widths.
pub fn svg_document(
    url: &str,
    ec_level: EcLevel,
    size: u32,
    quiet_zone: u32,
    dark: &str,
    light: &str,
) -> AppResult<String> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), ec_level.to_qrcode())?;
    let document = code
        .render::<svg::Color>()
        .quiet_zone(quiet_zone > 0)
        .min_dimensions(size, size)
        .dark_color(svg::Color(dark))
        .light_color(svg::Color(light))
        .build();
    Ok(document)
}

/// Write an SVG file, returning the number of bytes written.
pub fn write_svg(
    url: &str,
    ec_level: EcLevel,
    size: u32,
    quiet_zone: u32,
    dark: &str,
    light: &str,
    path: &Path,
) -> AppResult<u64> {
    let document = svg_document(url, ec_level, size, quiet_zone, dark, light)?;
    fs::write(path, &document)?;
    Ok(document.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://artbeaurescence.sn";

    #[test]
    fn test_svg_document_structure() {
        let document = svg_document(URL, EcLevel::Q, 640, 4, "#112233", "#ffffff").unwrap();
        assert!(document.starts_with("<?xml"));
        assert!(document.contains("<svg"));
        assert!(document.contains("#112233"));
        assert!(document.contains("#ffffff"));
    }

    #[test]
    fn test_svg_deterministic() {
        let a = svg_document(URL, EcLevel::M, 512, 4, "#000000", "#ffffff").unwrap();
        let b = svg_document(URL, EcLevel::M, 512, 4, "#000000", "#ffffff").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_capacity_error_propagates() {
        let payload = "x".repeat(3000);
        assert!(svg_document(&payload, EcLevel::H, 640, 4, "#000000", "#ffffff").is_err());
    }
}
