pub mod compose;
pub mod logo;
pub mod mask;

use image::RgbaImage;

use crate::core::error::AppResult;
use crate::core::models::QrRequest;

/// Run the full pipeline for one request: mask, fill composite, optional logo.
///
/// A logo that fails to load is skipped; every other failure aborts the call.
pub fn render(request: &QrRequest) -> AppResult<RgbaImage> {
    let mask = mask::render_mask(&request.url, request.ec_level, request.size, request.quiet_zone)?;
    let mut canvas = compose::composite(&mask, &request.fill);

    if let Some(path) = &request.logo {
        if let Some(logo) = logo::load_logo(path) {
            logo::overlay_logo(&mut canvas, &logo);
        }
    }

    Ok(canvas)
}
