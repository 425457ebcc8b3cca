use image::Rgba;

use crate::core::error::{AppError, AppResult};

/// Parse a `#rrggbb` hex color into an opaque RGBA pixel. The leading `#` is
/// optional; shorthand forms are not accepted.
pub fn parse_hex(input: &str) -> AppResult<Rgba<u8>> {
    let hex = input.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidColor(format!("expected #rrggbb, got {input:?}")));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| AppError::InvalidColor(format!("expected #rrggbb, got {input:?}")))
    };

    Ok(Rgba([byte(0)?, byte(2)?, byte(4)?, 255]))
}
