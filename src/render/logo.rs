use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use std::path::Path;
use tracing::warn;

/// Largest logo dimension as a fraction of the QR side length.
pub const LOGO_FRACTION: f32 = 0.22;
/// Extra halo radius beyond half the larger scaled logo dimension.
pub const HALO_PADDING: f32 = 0.12;
/// Halo opacity (85% white).
pub const HALO_ALPHA: u8 = 217;

/// Load the branding logo. Failure is non-fatal: the QR ships unbranded.
pub fn load_logo(path: &Path) -> Option<DynamicImage> {
    match image::open(path) {
        Ok(logo) => Some(logo),
        Err(err) => {
            warn!("Skipping logo overlay, failed to load {:?}: {}", path, err);
            None
        }
    }
}

/// Scale the logo, draw a white contrast halo beneath it, and center both.
pub fn overlay_logo(canvas: &mut RgbaImage, logo: &DynamicImage) {
    let side = canvas.width().min(canvas.height());
    let (w, h) = scaled_dimensions(side, logo.width(), logo.height());
    let scaled = imageops::resize(&logo.to_rgba8(), w, h, FilterType::Lanczos3);

    let cx = (canvas.width() / 2) as i32;
    let cy = (canvas.height() / 2) as i32;
    let mut halo = RgbaImage::new(canvas.width(), canvas.height());
    draw_filled_circle_mut(&mut halo, (cx, cy), halo_radius(w, h), Rgba([255, 255, 255, HALO_ALPHA]));
    imageops::overlay(canvas, &halo, 0, 0);

    let x = i64::from((canvas.width() - w) / 2);
    let y = i64::from((canvas.height() - h) / 2);
    imageops::overlay(canvas, &scaled, x, y);
}

/// Logo size after scaling: largest dimension at 22% of the QR side, aspect
/// ratio preserved.
fn scaled_dimensions(side: u32, logo_w: u32, logo_h: u32) -> (u32, u32) {
    let target = (side as f32 * LOGO_FRACTION).floor();
    let scale = (target / logo_w as f32).min(target / logo_h as f32);
    let w = (logo_w as f32 * scale).round().max(1.0) as u32;
    let h = (logo_h as f32 * scale).round().max(1.0) as u32;
    (w, h)
}

fn halo_radius(w: u32, h: u32) -> i32 {
    (w.max(h) as f32 / 2.0 * (1.0 + HALO_PADDING)).round() as i32
}
