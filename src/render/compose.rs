use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::core::models::Fill;

/// Restrict a fill to the opaque pixels of a mask.
///
/// Output alpha equals the mask alpha at every coordinate; output color is the
/// fill color for that row.
pub fn composite(mask: &RgbaImage, fill: &Fill) -> RgbaImage {
    let (width, height) = mask.dimensions();
    let mut out = RgbaImage::new(width, height);

    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let alpha = mask.get_pixel(x, y)[3];
        if alpha == 0 {
            continue;
        }
        let Rgba([r, g, b, _]) = fill_at(fill, y, height);
        *pixel = Rgba([r, g, b, alpha]);
    }

    out
}

/// Composite an RGBA image over an opaque background color.
///
/// JPEG and PDF targets carry no alpha channel.
pub fn flatten(image: &RgbaImage, background: Rgba<u8>) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = RgbImage::new(width, height);

    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let src = image.get_pixel(x, y);
        let alpha = f32::from(src[3]) / 255.0;
        let inv = 1.0 - alpha;
        *pixel = Rgb([
            (f32::from(src[0]) * alpha + f32::from(background[0]) * inv).round() as u8,
            (f32::from(src[1]) * alpha + f32::from(background[1]) * inv).round() as u8,
            (f32::from(src[2]) * alpha + f32::from(background[2]) * inv).round() as u8,
        ]);
    }

    out
}

fn fill_at(fill: &Fill, row: u32, height: u32) -> Rgba<u8> {
    match *fill {
        Fill::Solid(color) => color,
        Fill::Gradient { top, bottom } => {
            let t = if height <= 1 {
                0.0
            } else {
                row as f32 / (height - 1) as f32
            };
            lerp(top, bottom, t)
        }
    }
}

fn lerp(a: Rgba<u8>, b: Rgba<u8>, t: f32) -> Rgba<u8> {
    let mix = |ca: u8, cb: u8| (f32::from(ca) + (f32::from(cb) - f32::from(ca)) * t).round() as u8;
    Rgba([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkered_mask(size: u32) -> RgbaImage {
        let mut mask = RgbaImage::new(size, size);
        for (x, y, pixel) in mask.enumerate_pixels_mut() {
            if (x + y) % 2 == 0 {
                *pixel = Rgba([0, 0, 0, 255]);
            }
        }
        mask
    }

    #[test]
    fn test_output_alpha_equals_mask_alpha() {
        let mask = checkered_mask(32);
        let fill = Fill::Gradient {
            top: Rgba([255, 0, 0, 255]),
            bottom: Rgba([0, 0, 255, 255]),
        };
        let out = composite(&mask, &fill);
        for (x, y, pixel) in out.enumerate_pixels() {
            assert_eq!(pixel[3], mask.get_pixel(x, y)[3]);
        }
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut mask = RgbaImage::new(4, 4);
        for (_, _, pixel) in mask.enumerate_pixels_mut() {
            *pixel = Rgba([0, 0, 0, 255]);
        }
        let fill = Fill::Gradient {
            top: Rgba([10, 20, 30, 255]),
            bottom: Rgba([210, 220, 230, 255]),
        };
        let out = composite(&mask, &fill);
        assert_eq!(out.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
        assert_eq!(out.get_pixel(0, 3), &Rgba([210, 220, 230, 255]));
    }

    #[test]
    fn test_solid_fill_keeps_color() {
        let mask = checkered_mask(8);
        let out = composite(&mask, &Fill::Solid(Rgba([17, 34, 51, 255])));
        for pixel in out.pixels() {
            assert!(pixel[3] == 0 || pixel.0[..3] == [17, 34, 51]);
        }
    }

    #[test]
    fn test_flatten_transparent_gives_background() {
        let image = RgbaImage::new(5, 5);
        let flat = flatten(&image, Rgba([250, 251, 252, 255]));
        for pixel in flat.pixels() {
            assert_eq!(pixel, &Rgb([250, 251, 252]));
        }
    }

    #[test]
    fn test_flatten_opaque_keeps_foreground() {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([7, 8, 9, 255]));
        let flat = flatten(&image, Rgba([255, 255, 255, 255]));
        assert_eq!(flat.get_pixel(0, 0), &Rgb([7, 8, 9]));
        assert_eq!(flat.get_pixel(1, 1), &Rgb([255, 255, 255]));
    }
}
