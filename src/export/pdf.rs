use image::{DynamicImage, Rgba, RgbaImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use std::fs;
use std::path::Path;

use crate::core::error::{AppError, AppResult};
use crate::render::compose;

/// A4 portrait page.
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Physical width of the embedded (square) QR image.
pub const IMAGE_WIDTH_MM: f64 = 160.0;

const MM_PER_INCH: f64 = 25.4;

/// Margins that center a 160 mm square on the page: 25 mm horizontal,
/// 68.5 mm vertical.
pub fn margins() -> (f64, f64) {
    (
        (PAGE_WIDTH_MM - IMAGE_WIDTH_MM) / 2.0,
        (PAGE_HEIGHT_MM - IMAGE_WIDTH_MM) / 2.0,
    )
}

/// Produce a single-page A4 document with the rendered image centered at a
/// fixed 160 mm print width.
pub fn pdf_bytes(image: &RgbaImage, background: Rgba<u8>) -> AppResult<Vec<u8>> {
    // PDF pages are opaque; flatten before embedding.
    let flat = DynamicImage::ImageRgb8(compose::flatten(image, background));
    let dpi = f64::from(flat.width()) * MM_PER_INCH / IMAGE_WIDTH_MM;
    let (margin_x, margin_y) = margins();

    let (doc, page, layer) = PdfDocument::new(
        "artbeaurescence QR code",
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "QR layer",
    );
    let current_layer = doc.get_page(page).get_layer(layer);

    Image::from_dynamic_image(&flat).add_to_layer(
        current_layer,
        ImageTransform {
            translate_x: Some(Mm(margin_x as f32)),
            translate_y: Some(Mm(margin_y as f32)),
            dpi: Some(dpi as f32),
            ..Default::default()
        },
    );

    doc.save_to_bytes().map_err(|e| AppError::Pdf(e.to_string()))
}

/// Write a PDF file, returning the number of bytes written.
pub fn write_pdf(image: &RgbaImage, background: Rgba<u8>, path: &Path) -> AppResult<u64> {
    let bytes = pdf_bytes(image, background)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}
