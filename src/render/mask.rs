use image::{Rgba, RgbaImage};
use qrcode::{Color, QrCode};

use crate::core::error::{AppError, AppResult};
use crate::core::models::EcLevel;

const OPAQUE: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Render a QR code mask: dark modules fully opaque, everything else fully
/// transparent, at exactly `size` x `size` pixels.
///
/// Module computation is delegated to the `qrcode` crate; this only maps the
/// module matrix (plus quiet zone) onto the requested pixel grid. Each output
/// pixel is assigned the module its coordinate scales down to, so arbitrary
/// sizes are hit exactly at the cost of +-1px module edges.
pub fn render_mask(url: &str, ec_level: EcLevel, size: u32, quiet_zone: u32) -> AppResult<RgbaImage> {
    if size == 0 {
        return Err(AppError::Encoding("requested size must be non-zero".to_string()));
    }

    let code = QrCode::with_error_correction_level(url.as_bytes(), ec_level.to_qrcode())?;
    let modules = code.to_colors();
    let width = code.width() as u32;
    let total = width + 2 * quiet_zone;

    let mut mask = RgbaImage::new(size, size);
    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let mx = (u64::from(x) * u64::from(total) / u64::from(size)) as u32;
        let my = (u64::from(y) * u64::from(total) / u64::from(size)) as u32;

        // Quiet zone stays transparent
        if mx < quiet_zone || my < quiet_zone || mx >= quiet_zone + width || my >= quiet_zone + width {
            continue;
        }

        let idx = ((my - quiet_zone) * width + (mx - quiet_zone)) as usize;
        if modules[idx] == Color::Dark {
            *pixel = OPAQUE;
        }
    }

    Ok(mask)
}
