use image::{ImageOutputFormat, Rgba, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::core::error::AppResult;
use crate::render::compose;

/// Fixed JPEG quality, matching a 0.95 canvas export.
pub const JPEG_QUALITY: u8 = 95;

/// Encode as PNG, alpha channel preserved.
pub fn png_bytes(image: &RgbaImage) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)?;
    Ok(buf)
}

/// Encode as JPEG, flattened onto the background color first.
pub fn jpeg_bytes(image: &RgbaImage, background: Rgba<u8>) -> AppResult<Vec<u8>> {
    let flat = compose::flatten(image, background);
    let mut buf = Vec::new();
    flat.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Jpeg(JPEG_QUALITY))?;
    Ok(buf)
}

/// Write a PNG file, returning the number of bytes written.
pub fn write_png(image: &RgbaImage, path: &Path) -> AppResult<u64> {
    let bytes = png_bytes(image)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}

/// Write a JPEG file, returning the number of bytes written.
pub fn write_jpeg(image: &RgbaImage, background: Rgba<u8>, path: &Path) -> AppResult<u64> {
    let bytes = jpeg_bytes(image, background)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> RgbaImage {
        let mut image = RgbaImage::new(12, 12);
        image.put_pixel(3, 3, Rgba([10, 20, 30, 255]));
        image
    }

    #[test]
    fn test_png_round_trip() {
        let bytes = png_bytes(&sample()).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 12);
        assert_eq!(decoded.to_rgba8().get_pixel(3, 3), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_jpeg_magic_and_dimensions() {
        let bytes = jpeg_bytes(&sample(), Rgba([255, 255, 255, 255])).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 12);
    }

    #[test]
    fn test_write_reports_byte_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.png");
        let written = write_png(&sample(), &path).unwrap();
        assert_eq!(written, std::fs::metadata(&path).unwrap().len());
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let result = write_png(&sample(), Path::new("/no/such/dir/out.png"));
        assert!(result.is_err());
    }
}
